use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use log::{info, warn};

use crate::core::config::StorageConfig;

/// 設定ファイルの読み書き先を抽象化するトレイト
///
/// このトレイトを実装することで、SDカード上のファイルとテスト用の
/// メモリ実装を切り替えることができます。
pub trait SettingsStorage {
    /// 設定テキストを読み込む。保存先が存在しない場合は `Ok(None)`
    fn read_text(&self) -> io::Result<Option<String>>;

    /// 設定テキストを書き込む
    fn write_text(&mut self, contents: &str) -> io::Result<()>;
}

/// ファイルシステム上の設定ファイル
#[derive(Debug, Clone)]
pub struct FileStorage {
    config: StorageConfig,
}

impl FileStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// 指定パスを一時ファイル経由で保存する設定で作成します
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageConfig::load().with_path(path))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.config.settings_path
    }

    /// 一時ファイルのパス（保存先と同じディレクトリ）
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .config
            .settings_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.config.settings_path.with_file_name(name)
    }

    fn write_direct(&self, contents: &str) -> io::Result<()> {
        let mut file = fs::File::create(&self.config.settings_path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()
    }

    fn write_atomic(&self, contents: &str) -> io::Result<()> {
        let temp_path = self.temp_path();

        let result = (|| {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(contents.as_bytes())?;
            file.sync_all()?;
            drop(file);
            fs::rename(&temp_path, &self.config.settings_path)
        })();

        if result.is_err() {
            if let Err(e) = fs::remove_file(&temp_path) {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!("一時ファイル {:?} を削除できません: {}", temp_path, e);
                }
            }
        }
        result
    }
}

impl SettingsStorage for FileStorage {
    fn read_text(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.config.settings_path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write_text(&mut self, contents: &str) -> io::Result<()> {
        info!("設定ファイルを保存します: {:?}", self.config.settings_path);
        if self.config.atomic_save {
            self.write_atomic(contents)
        } else {
            self.write_direct(contents)
        }
    }
}

/// テスト用のメモリ上の保存先
///
/// 書き込まれた内容を保持し、書き込みエラーをシミュレートできます。
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    /// 保存内容（`None` はファイルが存在しない状態）
    pub contents: Option<String>,
    /// エラーシミュレーション用のフラグ
    pub simulate_read_error: bool,
    pub simulate_write_error: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の設定テキストを持つ状態で作成します
    pub fn with_contents(text: &str) -> Self {
        Self {
            contents: Some(text.to_string()),
            ..Self::default()
        }
    }
}

impl SettingsStorage for MemoryStorage {
    fn read_text(&self) -> io::Result<Option<String>> {
        if self.simulate_read_error {
            return Err(io::Error::new(io::ErrorKind::Other, "Simulated read error"));
        }
        Ok(self.contents.clone())
    }

    fn write_text(&mut self, contents: &str) -> io::Result<()> {
        if self.simulate_write_error {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Simulated write error",
            ));
        }
        self.contents = Some(contents.to_string());
        Ok(())
    }
}

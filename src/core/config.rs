use std::path::PathBuf;

use crate::core::config_validation::ValidationError;

/// ビルド時設定
///
/// この構造体はビルド時に`cfg.toml`ファイルから読み込まれた設定を保持します。
/// `cfg.toml` がない場合はデフォルト値が使われます。
#[toml_cfg::toml_config]
pub struct Config {
    #[default("/sd/config.txt")]
    settings_path: &'static str,

    #[default(true)] // 一時ファイルに書いてからリネーム
    atomic_save: bool,
}

/// 設定エラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("'{key}' の値が不正な形式です: '{value}'")]
    InvalidFormat { key: String, value: String },
    #[error("'{key}' の値が範囲外です: '{value}'")]
    OutOfRange { key: String, value: String },
    #[error("'{key}' の値が長すぎます ({max_len} バイトまで)")]
    ValueTooLong { key: String, max_len: usize },
    #[error("{line} 行目の書式が不正です: '{content}'")]
    Syntax { line: usize, content: String },
    #[error("設定ファイルの入出力エラー: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// キー名付きのエラーへ変換します
    pub fn from_validation(err: ValidationError, key: &str, value: &str) -> Self {
        match err {
            ValidationError::InvalidFormat => ConfigError::InvalidFormat {
                key: key.to_string(),
                value: value.to_string(),
            },
            ValidationError::OutOfRange => ConfigError::OutOfRange {
                key: key.to_string(),
                value: value.to_string(),
            },
            ValidationError::TooLong { max_len } => ConfigError::ValueTooLong {
                key: key.to_string(),
                max_len,
            },
        }
    }
}

/// 設定ファイルの保存先設定
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// 設定ファイルのパス
    pub settings_path: PathBuf,

    /// 保存時に一時ファイル経由で置き換えるか
    pub atomic_save: bool,
}

impl StorageConfig {
    /// ビルド時設定から読み込みます
    pub fn load() -> Self {
        // toml_cfg によって生成された定数
        let config = CONFIG;

        Self {
            settings_path: PathBuf::from(config.settings_path),
            atomic_save: config.atomic_save,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }

    pub fn with_atomic_save(mut self, atomic_save: bool) -> Self {
        self.atomic_save = atomic_save;
        self
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::load()
    }
}

//! 設定の一括読み込み・保存・JSON出力

use log::{error, info};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::config::ConfigError;
use crate::core::field_registry::{apply_setting, SetOutcome, FIELDS};
use crate::core::kv_file::parse_kv_text;
use crate::core::settings::CameraSettings;
use crate::core::storage::SettingsStorage;

/// 保存ファイル先頭のコメント行
pub const CONFIG_FILE_HEADER: [&str; 2] = [
    "# ESP32-CAM interval - Configuration file",
    "# Configuration Generated from Set-up mode",
];

/// 一括読み込みの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 設定を読み込んだ
    Loaded {
        /// 適用したキーの数
        applied: usize,
        /// 未知・廃止のため無視したキーの数
        ignored: usize,
    },
    /// 設定ファイルが存在しないためデフォルト値のまま
    NotFound,
}

impl CameraSettings {
    /// (キー, 値) の列を順に適用します
    ///
    /// 最初のエラーで中断し、そのエラーを返します。適用は作業用コピーに対して
    /// 行い、全件成功した場合のみ反映するため、失敗時は設定が変わりません。
    /// 未知のキーと廃止されたキーは警告のみで読み飛ばします。
    pub fn load_pairs<'a, I>(&mut self, pairs: I) -> Result<LoadOutcome, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut working = self.clone();
        let mut applied = 0;
        let mut ignored = 0;

        for (key, value) in pairs {
            match apply_setting(&mut working, key, value)? {
                SetOutcome::Applied => applied += 1,
                SetOutcome::Deprecated | SetOutcome::Unknown => ignored += 1,
            }
        }

        *self = working;
        Ok(LoadOutcome::Loaded { applied, ignored })
    }

    /// 設定テキストを解析して適用します
    pub fn load_text(&mut self, text: &str) -> Result<LoadOutcome, ConfigError> {
        let lines = parse_kv_text(text)?;
        self.load_pairs(lines.iter().map(|l| (l.key, l.value)))
    }

    /// 保存先から設定を読み込みます
    ///
    /// 保存先が存在しない場合はエラーにせず `LoadOutcome::NotFound` を返し、
    /// 現在の値（デフォルト値）を維持します。
    pub fn load_from<S: SettingsStorage + ?Sized>(
        &mut self,
        storage: &S,
    ) -> Result<LoadOutcome, ConfigError> {
        let Some(text) = storage.read_text()? else {
            info!("設定ファイルが見つかりません。デフォルト値を使用します");
            return Ok(LoadOutcome::NotFound);
        };

        info!("設定を読み込んでいます...");
        match self.load_text(&text) {
            Ok(outcome) => {
                info!("設定を読み込みました: {:?}", outcome);
                Ok(outcome)
            }
            Err(e) => {
                error!("設定の解析に失敗しました: {}", e);
                Err(e)
            }
        }
    }

    /// 設定ファイル形式のテキストを生成します
    ///
    /// 先頭2行のコメントに続き、全キーを固定順で `key = value` 形式で出力します。
    pub fn to_config_text(&self) -> String {
        let mut text = String::new();
        for line in CONFIG_FILE_HEADER {
            text.push_str(line);
            text.push('\n');
        }
        for field in FIELDS.iter() {
            text.push_str(field.key);
            text.push_str(" = ");
            text.push_str(&field.render(self).to_config_text());
            text.push('\n');
        }
        text
    }

    /// 保存先へ設定を書き込みます
    pub fn save_to<S: SettingsStorage + ?Sized>(&self, storage: &mut S) -> Result<(), ConfigError> {
        info!("設定を保存しています...");
        storage.write_text(&self.to_config_text()).map_err(|e| {
            error!("設定ファイルを書き込めません: {}", e);
            ConfigError::Io(e)
        })
    }

    /// 全キーを固定順に並べたフラットなJSONオブジェクトを生成します
    ///
    /// 真偽値は `1` / `0`、列挙値は小文字の文字列で出力します。
    pub fn to_json(&self) -> String {
        // 値は整数・文字列のみなのでシリアライズは失敗しない
        serde_json::to_string(self).unwrap_or_else(|e| {
            error!("JSONの生成に失敗しました: {}", e);
            String::from("{}")
        })
    }
}

impl Serialize for CameraSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELDS.len()))?;
        for field in FIELDS.iter() {
            map.serialize_entry(field.key, &field.render(self))?;
        }
        map.end()
    }
}

//! 設定キーのレジストリ
//!
//! 認識する設定キーごとに「値の解析・検証・書き込み」と「外部表現への変換」を
//! 1つの記述子にまとめた静的テーブルです。テーブルの並び順がそのまま
//! 保存ファイルとJSONの出力順になります。

use std::collections::HashMap;

use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use crate::core::config::ConfigError;
use crate::core::config_validation::{parse_bool, parse_int, ValidationError};
use crate::core::orientation::Orientation;
use crate::core::settings::CameraSettings;
use crate::hardware::camera::{FrameSize, GainCeiling, SpecialEffect, WbMode};

/// 読み込み時に警告のみ出して無視する旧バージョンのキー
pub const DEPRECATED_KEYS: [&str; 3] = ["ssid", "password", "ntp_server"];

/// フィールドの外部表現
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Flag(bool),
    Text(String),
}

impl FieldValue {
    /// 設定ファイルに書き出す文字列（真偽値は `1` / `0`）
    pub fn to_config_text(&self) -> String {
        match self {
            FieldValue::Int(v) => v.to_string(),
            FieldValue::Flag(b) => u8::from(*b).to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Int(v) => serializer.serialize_i64(*v),
            // JSON でも true/false ではなく 1/0 で出力する
            FieldValue::Flag(b) => serializer.serialize_u8(u8::from(*b)),
            FieldValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

type ApplyFn = fn(&mut CameraSettings, &str) -> Result<(), ValidationError>;
type RenderFn = fn(&CameraSettings) -> FieldValue;

/// 1つの設定キーの記述子
pub struct FieldDescriptor {
    /// 設定ファイル・JSON上のキー名
    pub key: &'static str,
    apply: ApplyFn,
    render: RenderFn,
}

impl FieldDescriptor {
    /// 値を解析・検証して書き込みます。失敗時は設定を変更しません。
    pub fn apply(&self, settings: &mut CameraSettings, value: &str) -> Result<(), ValidationError> {
        (self.apply)(settings, value)
    }

    /// 現在値を外部表現で取得します
    pub fn render(&self, settings: &CameraSettings) -> FieldValue {
        (self.render)(settings)
    }
}

fn text(s: &str) -> FieldValue {
    FieldValue::Text(s.to_string())
}

/// 全設定キー（出力順）
pub static FIELDS: [FieldDescriptor; 30] = [
    FieldDescriptor {
        key: "interval",
        apply: |s, v| {
            let requested = parse_int(v)?;
            let applied = s.set_capture_interval_ms(requested)?;
            if i64::from(applied) != requested {
                warn!("キャプチャ間隔が短すぎるため {} ms に変更しました", applied);
            }
            Ok(())
        },
        render: |s| FieldValue::Int(i64::from(s.capture_interval_ms())),
    },
    FieldDescriptor {
        key: "enable_busy_led",
        apply: |s, v| {
            s.set_enable_busy_led(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.enable_busy_led()),
    },
    FieldDescriptor {
        key: "enable_flash",
        apply: |s, v| {
            s.set_enable_flash(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.enable_flash()),
    },
    FieldDescriptor {
        key: "training_shots",
        apply: |s, v| s.set_training_shots(parse_int(v)?),
        render: |s| FieldValue::Int(i64::from(s.training_shots())),
    },
    FieldDescriptor {
        key: "timezone",
        apply: |s, v| s.set_timezone(v),
        render: |s| text(s.timezone()),
    },
    FieldDescriptor {
        key: "rotation",
        apply: |s, v| {
            let orientation =
                Orientation::from_rotation(parse_int(v)?).ok_or(ValidationError::OutOfRange)?;
            s.set_orientation(orientation);
            Ok(())
        },
        render: |s| FieldValue::Int(s.orientation().rotation()),
    },
    FieldDescriptor {
        key: "framesize",
        apply: |s, v| {
            let size = FrameSize::from_config_str(v).ok_or(ValidationError::InvalidFormat)?;
            s.set_frame_size(size);
            Ok(())
        },
        render: |s| text(s.frame_size().dimension_alias()),
    },
    FieldDescriptor {
        key: "quality",
        apply: |s, v| s.set_quality(parse_int(v)?),
        render: |s| FieldValue::Int(i64::from(s.quality())),
    },
    FieldDescriptor {
        key: "contrast",
        apply: |s, v| s.set_contrast(parse_int(v)?),
        render: |s| FieldValue::Int(i64::from(s.contrast())),
    },
    FieldDescriptor {
        key: "brightness",
        apply: |s, v| s.set_brightness(parse_int(v)?),
        render: |s| FieldValue::Int(i64::from(s.brightness())),
    },
    FieldDescriptor {
        key: "saturation",
        apply: |s, v| s.set_saturation(parse_int(v)?),
        render: |s| FieldValue::Int(i64::from(s.saturation())),
    },
    FieldDescriptor {
        key: "colorbar",
        apply: |s, v| {
            s.set_colorbar(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.colorbar()),
    },
    FieldDescriptor {
        key: "hmirror",
        apply: |s, v| {
            s.set_hmirror(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.hmirror()),
    },
    FieldDescriptor {
        key: "vflip",
        apply: |s, v| {
            s.set_vflip(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.vflip()),
    },
    FieldDescriptor {
        key: "awb",
        apply: |s, v| {
            s.set_awb(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.awb()),
    },
    FieldDescriptor {
        key: "awb_gain",
        apply: |s, v| {
            s.set_awb_gain(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.awb_gain()),
    },
    FieldDescriptor {
        key: "wb_mode",
        apply: |s, v| {
            let mode = WbMode::from_config_str(v).ok_or(ValidationError::InvalidFormat)?;
            s.set_wb_mode(mode);
            Ok(())
        },
        render: |s| text(s.wb_mode().as_str()),
    },
    FieldDescriptor {
        key: "agc",
        apply: |s, v| {
            s.set_agc(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.agc()),
    },
    FieldDescriptor {
        key: "agc_gain",
        apply: |s, v| s.set_agc_gain(parse_int(v)?),
        render: |s| FieldValue::Int(s.agc_gain()),
    },
    FieldDescriptor {
        key: "gainceiling",
        apply: |s, v| {
            let ceiling = GainCeiling::from_code(parse_int(v)?).ok_or(ValidationError::OutOfRange)?;
            s.set_gain_ceiling(ceiling);
            Ok(())
        },
        render: |s| FieldValue::Int(i64::from(s.gain_ceiling().code())),
    },
    FieldDescriptor {
        key: "aec",
        apply: |s, v| {
            s.set_aec(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.aec()),
    },
    FieldDescriptor {
        key: "aec_value",
        apply: |s, v| s.set_aec_value(parse_int(v)?),
        render: |s| FieldValue::Int(i64::from(s.aec_value())),
    },
    FieldDescriptor {
        key: "aec2",
        apply: |s, v| {
            s.set_aec2(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.aec2()),
    },
    FieldDescriptor {
        key: "ae_level",
        apply: |s, v| s.set_ae_level(parse_int(v)?),
        render: |s| FieldValue::Int(i64::from(s.ae_level())),
    },
    FieldDescriptor {
        key: "dcw",
        apply: |s, v| {
            s.set_dcw(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.dcw()),
    },
    FieldDescriptor {
        key: "bpc",
        apply: |s, v| {
            s.set_bpc(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.bpc()),
    },
    FieldDescriptor {
        key: "wpc",
        apply: |s, v| {
            s.set_wpc(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.wpc()),
    },
    FieldDescriptor {
        key: "raw_gma",
        apply: |s, v| {
            s.set_raw_gma(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.raw_gma()),
    },
    FieldDescriptor {
        key: "lenc",
        apply: |s, v| {
            s.set_lenc(parse_bool(v)?);
            Ok(())
        },
        render: |s| FieldValue::Flag(s.lenc()),
    },
    FieldDescriptor {
        key: "special_effect",
        apply: |s, v| {
            let effect = SpecialEffect::from_config_str(v).ok_or(ValidationError::InvalidFormat)?;
            s.set_special_effect(effect);
            Ok(())
        },
        render: |s| text(s.special_effect().as_str()),
    },
];

/// 小文字化したキー名 → FIELDS のインデックス
static FIELD_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    FIELDS
        .iter()
        .enumerate()
        .map(|(i, field)| (field.key, i))
        .collect()
});

/// キー名から記述子を探します（大文字小文字を区別しない）
pub fn find_field(key: &str) -> Option<&'static FieldDescriptor> {
    let normalized = key.to_ascii_lowercase();
    FIELD_INDEX
        .get(normalized.as_str())
        .map(|&index| &FIELDS[index])
}

pub fn is_deprecated_key(key: &str) -> bool {
    DEPRECATED_KEYS
        .iter()
        .any(|deprecated| key.eq_ignore_ascii_case(deprecated))
}

/// 1組の (キー, 値) を適用した結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// 値を書き込んだ
    Applied,
    /// 旧バージョンのキーのため無視した
    Deprecated,
    /// 未知のキーのため無視した
    Unknown,
}

/// 1組の (キー, 値) を解析・検証して設定に書き込みます
///
/// # 引数
///
/// * `settings` - 書き込み先の設定
/// * `key` - 設定キー（大文字小文字を区別しない）
/// * `value` - 値の文字列
///
/// # エラー
///
/// 既知のキーで値の形式が不正、または値域外の場合にエラーを返します。
/// このときフィールドは変更されません。未知のキーはエラーにしません。
pub fn apply_setting(
    settings: &mut CameraSettings,
    key: &str,
    value: &str,
) -> Result<SetOutcome, ConfigError> {
    debug!(" - '{}' => '{}'", key, value);

    if let Some(field) = find_field(key) {
        field.apply(settings, value).map_err(|e| {
            warn!("'{}' の値 '{}' を適用できません: {:?}", key, value, e);
            ConfigError::from_validation(e, field.key, value)
        })?;
        return Ok(SetOutcome::Applied);
    }

    if is_deprecated_key(key) {
        warn!("廃止されたオプション '{}' を無視します", key);
        return Ok(SetOutcome::Deprecated);
    }

    warn!("未知のキー '{}' を無視します", key);
    Ok(SetOutcome::Unknown)
}

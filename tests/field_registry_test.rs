// Field Registry Unit Tests
// これらのテストはホストマシンで実行されます

use cam_settings::core::config_validation::{
    AEC_VALUE_MAX, AEC_VALUE_MIN, AGC_GAIN_MAX, AGC_GAIN_MIN, LEVEL_MAX, LEVEL_MIN, QUALITY_MAX,
    QUALITY_MIN,
};
use cam_settings::{
    apply_setting, CameraSettings, ConfigError, FrameSize, Orientation, SetOutcome,
    SpecialEffect, WbMode,
};

fn apply(settings: &mut CameraSettings, key: &str, value: &str) -> Result<SetOutcome, ConfigError> {
    apply_setting(settings, key, value)
}

#[test]
fn test_integer_field_boundaries() {
    let cases: [(&str, i64, i64); 8] = [
        ("quality", QUALITY_MIN, QUALITY_MAX),
        ("contrast", LEVEL_MIN, LEVEL_MAX),
        ("brightness", LEVEL_MIN, LEVEL_MAX),
        ("saturation", LEVEL_MIN, LEVEL_MAX),
        ("ae_level", LEVEL_MIN, LEVEL_MAX),
        ("agc_gain", AGC_GAIN_MIN, AGC_GAIN_MAX),
        ("gainceiling", 0, 6),
        ("aec_value", AEC_VALUE_MIN, AEC_VALUE_MAX),
    ];

    for (key, min, max) in cases {
        let mut settings = CameraSettings::default();

        assert!(apply(&mut settings, key, &min.to_string()).is_ok(), "{} min", key);
        assert!(apply(&mut settings, key, &max.to_string()).is_ok(), "{} max", key);

        let before = settings.clone();
        let below = apply(&mut settings, key, &(min - 1).to_string());
        assert!(
            matches!(below, Err(ConfigError::OutOfRange { .. })),
            "{} min-1: {:?}",
            key,
            below
        );
        let above = apply(&mut settings, key, &(max + 1).to_string());
        assert!(
            matches!(above, Err(ConfigError::OutOfRange { .. })),
            "{} max+1: {:?}",
            key,
            above
        );
        assert_eq!(settings, before, "{} changed after rejection", key);
    }
}

#[test]
fn test_quality_examples() {
    let mut settings = CameraSettings::default();
    assert!(apply(&mut settings, "quality", "9").is_err());
    assert!(apply(&mut settings, "quality", "10").is_ok());
    assert!(apply(&mut settings, "quality", "63").is_ok());
    assert!(apply(&mut settings, "quality", "64").is_err());
    assert_eq!(settings.quality(), 63);
}

#[test]
fn test_integer_field_rejects_non_numeric() {
    let mut settings = CameraSettings::default();
    let result = apply(&mut settings, "quality", "high");
    match result {
        Err(ConfigError::InvalidFormat { key, value }) => {
            assert_eq!(key, "quality");
            assert_eq!(value, "high");
        }
        other => panic!("Expected InvalidFormat, got {:?}", other),
    }
}

#[test]
fn test_integer_trailing_garbage_is_tolerated() {
    let mut settings = CameraSettings::default();
    apply(&mut settings, "quality", "12abc").unwrap();
    assert_eq!(settings.quality(), 12);
}

#[test]
fn test_boolean_spellings() {
    let mut settings = CameraSettings::default();
    apply(&mut settings, "hmirror", "YES").unwrap();
    assert!(settings.hmirror());
    apply(&mut settings, "hmirror", "No").unwrap();
    assert!(!settings.hmirror());
    apply(&mut settings, "hmirror", "1").unwrap();
    assert!(settings.hmirror());
    apply(&mut settings, "hmirror", "0").unwrap();
    assert!(!settings.hmirror());
    apply(&mut settings, "enable_flash", "TRUE").unwrap();
    assert!(settings.enable_flash());

    let result = apply(&mut settings, "hmirror", "maybe");
    assert!(matches!(result, Err(ConfigError::InvalidFormat { .. })));
    assert!(!settings.hmirror());
}

#[test]
fn test_key_match_is_case_insensitive() {
    let mut settings = CameraSettings::default();
    assert_eq!(apply(&mut settings, "QUALITY", "30").unwrap(), SetOutcome::Applied);
    assert_eq!(apply(&mut settings, "Wb_Mode", "Sunny").unwrap(), SetOutcome::Applied);
    assert_eq!(settings.quality(), 30);
    assert_eq!(settings.wb_mode(), WbMode::Sunny);
}

#[test]
fn test_frame_size_preset_and_alias_are_identical() {
    let mut by_name = CameraSettings::default();
    let mut by_alias = CameraSettings::default();
    apply(&mut by_name, "framesize", "VGA").unwrap();
    apply(&mut by_alias, "framesize", "640x480").unwrap();
    assert_eq!(by_name.frame_size(), FrameSize::Vga);
    assert_eq!(by_name, by_alias);
}

#[test]
fn test_frame_size_rejects_unknown_preset() {
    let mut settings = CameraSettings::default();
    let result = apply(&mut settings, "framesize", "HD");
    assert!(matches!(result, Err(ConfigError::InvalidFormat { .. })));
    assert_eq!(settings.frame_size(), FrameSize::Uxga);
}

#[test]
fn test_special_effect_and_wb_mode() {
    let mut settings = CameraSettings::default();
    apply(&mut settings, "special_effect", "Blue Tint").unwrap();
    assert_eq!(settings.special_effect(), SpecialEffect::BlueTint);
    assert!(apply(&mut settings, "special_effect", "blue").is_err());
    assert!(apply(&mut settings, "wb_mode", "indoor").is_err());
    assert_eq!(settings.special_effect(), SpecialEffect::BlueTint);
}

#[test]
fn test_rotation_values() {
    let cases = [
        ("0", Orientation::Normal),
        ("90", Orientation::Rotate90),
        ("180", Orientation::Rotate180),
        ("270", Orientation::Rotate270),
        ("-90", Orientation::Rotate270),
        ("-180", Orientation::Rotate180),
        ("-270", Orientation::Rotate90),
    ];
    for (value, expected) in cases {
        let mut settings = CameraSettings::default();
        apply(&mut settings, "rotation", value).unwrap();
        assert_eq!(settings.orientation(), expected, "rotation = {}", value);
    }

    let mut settings = CameraSettings::default();
    assert!(matches!(
        apply(&mut settings, "rotation", "45"),
        Err(ConfigError::OutOfRange { .. })
    ));
    assert!(matches!(
        apply(&mut settings, "rotation", "right"),
        Err(ConfigError::InvalidFormat { .. })
    ));
}

#[test]
fn test_agc_gain_one_based() {
    let mut settings = CameraSettings::default();
    apply(&mut settings, "agc_gain", "1").unwrap();
    assert_eq!(settings.agc_gain_index(), 0);
    assert_eq!(settings.agc_gain(), 1);
    assert!(apply(&mut settings, "agc_gain", "0").is_err());
    assert!(apply(&mut settings, "agc_gain", "33").is_err());
}

#[test]
fn test_interval_clamped_not_rejected() {
    let mut settings = CameraSettings::default();
    assert_eq!(apply(&mut settings, "interval", "500").unwrap(), SetOutcome::Applied);
    assert_eq!(settings.capture_interval_ms(), 1000);
    apply(&mut settings, "interval", "60000").unwrap();
    assert_eq!(settings.capture_interval_ms(), 60000);
    assert!(apply(&mut settings, "interval", "-1").is_err());
    assert!(apply(&mut settings, "interval", "soon").is_err());
    assert_eq!(settings.capture_interval_ms(), 60000);
}

#[test]
fn test_training_shots() {
    let mut settings = CameraSettings::default();
    apply(&mut settings, "training_shots", "0").unwrap();
    assert_eq!(settings.training_shots(), 0);
    assert!(matches!(
        apply(&mut settings, "training_shots", "-1"),
        Err(ConfigError::OutOfRange { .. })
    ));
}

#[test]
fn test_timezone_too_long() {
    let mut settings = CameraSettings::default();
    apply(&mut settings, "timezone", "JST-9").unwrap();
    assert_eq!(settings.timezone(), "JST-9");

    let long = "x".repeat(64);
    match apply(&mut settings, "timezone", &long) {
        Err(ConfigError::ValueTooLong { key, max_len }) => {
            assert_eq!(key, "timezone");
            assert_eq!(max_len, 63);
        }
        other => panic!("Expected ValueTooLong, got {:?}", other),
    }
    assert_eq!(settings.timezone(), "JST-9");
}

#[test]
fn test_timezone_rejects_line_breaks_and_padding() {
    let mut settings = CameraSettings::default();
    apply(&mut settings, "timezone", "JST-9").unwrap();

    for value in ["JST-9\nquality = 5", "JST-9\nagc_gain = 20", "JST-9\r", " JST-9 "] {
        match apply(&mut settings, "timezone", value) {
            Err(ConfigError::InvalidFormat { key, .. }) => assert_eq!(key, "timezone"),
            other => panic!("Expected InvalidFormat for {:?}, got {:?}", value, other),
        }
    }
    assert_eq!(settings.timezone(), "JST-9");
}

#[test]
fn test_unknown_key_changes_nothing() {
    let mut settings = CameraSettings::default();
    assert_eq!(apply(&mut settings, "foo", "bar").unwrap(), SetOutcome::Unknown);
    assert_eq!(settings, CameraSettings::default());
}

#[test]
fn test_deprecated_keys_are_ignored() {
    let mut settings = CameraSettings::default();
    for key in ["ssid", "password", "ntp_server", "NTP_SERVER"] {
        assert_eq!(
            apply(&mut settings, key, "anything").unwrap(),
            SetOutcome::Deprecated,
            "{}",
            key
        );
    }
    assert_eq!(settings, CameraSettings::default());
}

//! 設定値の解析・範囲検証
//!
//! キーに依存しないプリミティブな解析と、各フィールドの値域チェックを
//! 提供します。キー名付きのエラーへの変換は呼び出し側で行います。

/// 検証エラー
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// 型として解釈できない（数値でない、真偽値でない、未知の列挙名）
    InvalidFormat,
    /// 型としては正しいが値域外
    OutOfRange,
    /// 文字列が長すぎる（`max_len` バイトまで）
    TooLong { max_len: usize },
}

/// キャプチャ間隔の最小値（ミリ秒）
///
/// ファイル名の日時フォーマットが秒単位のため、これ未満は切り上げます。
pub const MIN_CAPTURE_INTERVAL_MS: u32 = 1000;

pub const QUALITY_MIN: i64 = 10;
pub const QUALITY_MAX: i64 = 63;

/// contrast / brightness / saturation / ae_level 共通の値域
pub const LEVEL_MIN: i64 = -2;
pub const LEVEL_MAX: i64 = 2;

/// AGCゲイン（設定ファイル上は1始まり）
pub const AGC_GAIN_MIN: i64 = 1;
pub const AGC_GAIN_MAX: i64 = 32;

pub const AEC_VALUE_MIN: i64 = 0;
pub const AEC_VALUE_MAX: i64 = 1200;

/// 10進整数を解析します
///
/// 先頭の空白と符号を許容し、数字の後ろに続く文字は無視します。
/// 数字が1つもない場合は `InvalidFormat`、i64に収まらない場合は `OutOfRange` です。
pub fn parse_int(input: &str) -> Result<i64, ValidationError> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digit_len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        return Err(ValidationError::InvalidFormat);
    }

    let mut value: i64 = 0;
    for b in digits[..digit_len].bytes() {
        let d = i64::from(b - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(d) } else { v.checked_add(d) })
            .ok_or(ValidationError::OutOfRange)?;
    }

    Ok(value)
}

/// 真偽値を解析します
///
/// `true` / `yes` / `1` と `false` / `no` / `0` を大文字小文字を区別せず受け付けます。
pub fn parse_bool(input: &str) -> Result<bool, ValidationError> {
    if input.eq_ignore_ascii_case("true") || input.eq_ignore_ascii_case("yes") || input == "1" {
        Ok(true)
    } else if input.eq_ignore_ascii_case("false") || input.eq_ignore_ascii_case("no") || input == "0"
    {
        Ok(false)
    } else {
        Err(ValidationError::InvalidFormat)
    }
}

/// 値が `min..=max` に収まっているか検証します
pub fn check_range(value: i64, min: i64, max: i64) -> Result<i64, ValidationError> {
    if value < min || value > max {
        Err(ValidationError::OutOfRange)
    } else {
        Ok(value)
    }
}

/// キャプチャ間隔を正規化します
///
/// 負数と u32 を超える値は値域外、最小値未満は最小値へ切り上げます。
/// 切り上げは間隔だけの扱いで、他のフィールドは範囲外を拒否します。
pub fn normalize_capture_interval(value: i64) -> Result<u32, ValidationError> {
    let ms = u32::try_from(value).map_err(|_| ValidationError::OutOfRange)?;
    Ok(ms.max(MIN_CAPTURE_INTERVAL_MS))
}

/// 1始まりのAGCゲインを内部の0始まりへ変換します
pub fn agc_gain_to_internal(external: i64) -> Result<u8, ValidationError> {
    let value = check_range(external, AGC_GAIN_MIN, AGC_GAIN_MAX)?;
    u8::try_from(value - 1).map_err(|_| ValidationError::OutOfRange)
}

/// 内部の0始まりAGCゲインを1始まりへ戻します
pub fn agc_gain_to_external(internal: u8) -> i64 {
    i64::from(internal) + 1
}

/// 文字列長を検証します（`capacity` はNUL終端込みのバッファサイズ）
pub fn check_text_len(value: &str, capacity: usize) -> Result<(), ValidationError> {
    let max_len = capacity.saturating_sub(1);
    if value.len() > max_len {
        Err(ValidationError::TooLong { max_len })
    } else {
        Ok(())
    }
}

/// 設定ファイルの1行に書き戻せる文字列か検証します
///
/// 改行などの制御文字、前後の空白を含む値は保存・再読み込みで
/// 同じ値に戻らないため `InvalidFormat` とします。
pub fn check_config_text(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(char::is_control) || value.trim() != value {
        Err(ValidationError::InvalidFormat)
    } else {
        Ok(())
    }
}

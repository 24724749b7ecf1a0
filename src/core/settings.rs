use std::fmt;

use crate::core::config_validation::{
    agc_gain_to_external, agc_gain_to_internal, check_config_text, check_range, check_text_len,
    normalize_capture_interval, ValidationError, AEC_VALUE_MAX, AEC_VALUE_MIN, LEVEL_MAX,
    LEVEL_MIN, QUALITY_MAX, QUALITY_MIN,
};
use crate::core::orientation::Orientation;
use crate::hardware::camera::{FrameSize, GainCeiling, SpecialEffect, WbMode};

/// タイムゾーン文字列のバッファサイズ（NUL終端込み）
pub const TZINFO_CAPACITY: usize = 64;

/// 長さ制限付きのタイムゾーン文字列 (POSIX TZ形式, 例: "JST-9")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TzInfo(String);

impl TzInfo {
    /// 長さと文字種を検証して生成します。切り詰めは行いません。
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        check_text_len(value, TZINFO_CAPACITY)?;
        check_config_text(value)?;
        Ok(TzInfo(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TzInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// カメラ設定
///
/// 全フィールドは常に値域内の値を保持します。書き込みは検証付きの
/// setter 経由のみで、検証に失敗した場合は値を変更しません。
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSettings {
    capture_interval_ms: u32,
    enable_busy_led: bool,
    enable_flash: bool,
    training_shots: u32,
    timezone: TzInfo,
    orientation: Orientation,

    frame_size: FrameSize,
    quality: i8,
    contrast: i8,
    brightness: i8,
    saturation: i8,
    colorbar: bool,
    hmirror: bool,
    vflip: bool,
    awb: bool,
    awb_gain: bool,
    wb_mode: WbMode,
    agc: bool,
    /// 0始まり（設定ファイル上は1始まり）
    agc_gain: u8,
    gain_ceiling: GainCeiling,
    aec: bool,
    aec_value: u16,
    aec2: bool,
    ae_level: i8,
    dcw: bool,
    bpc: bool,
    wpc: bool,
    raw_gma: bool,
    lenc: bool,
    special_effect: SpecialEffect,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            capture_interval_ms: 5000,
            enable_busy_led: true,
            enable_flash: false,
            training_shots: 5,
            timezone: TzInfo("GMT0".to_string()),
            orientation: Orientation::Normal,

            frame_size: FrameSize::Uxga,
            quality: 10,
            contrast: 0,
            brightness: 0,
            saturation: 0,
            colorbar: false,
            hmirror: false,
            vflip: false,
            awb: true,
            awb_gain: true,
            wb_mode: WbMode::Auto,
            agc: true,
            agc_gain: 0,
            gain_ceiling: GainCeiling::X2,
            aec: true,
            aec_value: 300,
            aec2: false,
            ae_level: 0,
            dcw: true,
            bpc: false,
            wpc: true,
            raw_gma: true,
            lenc: true,
            special_effect: SpecialEffect::None,
        }
    }
}

/// [-2, 2] のレベル値を検証します
fn level(value: i64) -> Result<i8, ValidationError> {
    let v = check_range(value, LEVEL_MIN, LEVEL_MAX)?;
    i8::try_from(v).map_err(|_| ValidationError::OutOfRange)
}

impl CameraSettings {
    pub fn new() -> Self {
        Self::default()
    }

    // --- 撮影動作 ---

    pub fn capture_interval_ms(&self) -> u32 {
        self.capture_interval_ms
    }

    /// キャプチャ間隔を設定し、実際に保持された値を返します
    ///
    /// 1000ms未満は1000msへ切り上げます。
    pub fn set_capture_interval_ms(&mut self, value: i64) -> Result<u32, ValidationError> {
        self.capture_interval_ms = normalize_capture_interval(value)?;
        Ok(self.capture_interval_ms)
    }

    pub fn enable_busy_led(&self) -> bool {
        self.enable_busy_led
    }

    pub fn set_enable_busy_led(&mut self, value: bool) {
        self.enable_busy_led = value;
    }

    pub fn enable_flash(&self) -> bool {
        self.enable_flash
    }

    pub fn set_enable_flash(&mut self, value: bool) {
        self.enable_flash = value;
    }

    pub fn training_shots(&self) -> u32 {
        self.training_shots
    }

    pub fn set_training_shots(&mut self, value: i64) -> Result<(), ValidationError> {
        self.training_shots = u32::try_from(value).map_err(|_| ValidationError::OutOfRange)?;
        Ok(())
    }

    pub fn timezone(&self) -> &str {
        self.timezone.as_str()
    }

    pub fn set_timezone(&mut self, value: &str) -> Result<(), ValidationError> {
        self.timezone = TzInfo::new(value)?;
        Ok(())
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, value: Orientation) {
        self.orientation = value;
    }

    // --- センサー設定 ---

    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    pub fn set_frame_size(&mut self, value: FrameSize) {
        self.frame_size = value;
    }

    /// JPEG品質 (10〜63, 小さいほど高画質)
    pub fn quality(&self) -> i8 {
        self.quality
    }

    pub fn set_quality(&mut self, value: i64) -> Result<(), ValidationError> {
        let v = check_range(value, QUALITY_MIN, QUALITY_MAX)?;
        self.quality = i8::try_from(v).map_err(|_| ValidationError::OutOfRange)?;
        Ok(())
    }

    pub fn contrast(&self) -> i8 {
        self.contrast
    }

    pub fn set_contrast(&mut self, value: i64) -> Result<(), ValidationError> {
        self.contrast = level(value)?;
        Ok(())
    }

    pub fn brightness(&self) -> i8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, value: i64) -> Result<(), ValidationError> {
        self.brightness = level(value)?;
        Ok(())
    }

    pub fn saturation(&self) -> i8 {
        self.saturation
    }

    pub fn set_saturation(&mut self, value: i64) -> Result<(), ValidationError> {
        self.saturation = level(value)?;
        Ok(())
    }

    pub fn colorbar(&self) -> bool {
        self.colorbar
    }

    pub fn set_colorbar(&mut self, value: bool) {
        self.colorbar = value;
    }

    pub fn hmirror(&self) -> bool {
        self.hmirror
    }

    pub fn set_hmirror(&mut self, value: bool) {
        self.hmirror = value;
    }

    pub fn vflip(&self) -> bool {
        self.vflip
    }

    pub fn set_vflip(&mut self, value: bool) {
        self.vflip = value;
    }

    pub fn awb(&self) -> bool {
        self.awb
    }

    pub fn set_awb(&mut self, value: bool) {
        self.awb = value;
    }

    pub fn awb_gain(&self) -> bool {
        self.awb_gain
    }

    pub fn set_awb_gain(&mut self, value: bool) {
        self.awb_gain = value;
    }

    pub fn wb_mode(&self) -> WbMode {
        self.wb_mode
    }

    pub fn set_wb_mode(&mut self, value: WbMode) {
        self.wb_mode = value;
    }

    pub fn agc(&self) -> bool {
        self.agc
    }

    pub fn set_agc(&mut self, value: bool) {
        self.agc = value;
    }

    /// ドライバーへ渡す0始まりのAGCゲイン (0〜31)
    pub fn agc_gain_index(&self) -> u8 {
        self.agc_gain
    }

    /// 設定ファイル上の1始まりのAGCゲイン (1〜32)
    pub fn agc_gain(&self) -> i64 {
        agc_gain_to_external(self.agc_gain)
    }

    /// 1始まりのAGCゲインを設定します
    pub fn set_agc_gain(&mut self, value: i64) -> Result<(), ValidationError> {
        self.agc_gain = agc_gain_to_internal(value)?;
        Ok(())
    }

    pub fn gain_ceiling(&self) -> GainCeiling {
        self.gain_ceiling
    }

    pub fn set_gain_ceiling(&mut self, value: GainCeiling) {
        self.gain_ceiling = value;
    }

    pub fn aec(&self) -> bool {
        self.aec
    }

    pub fn set_aec(&mut self, value: bool) {
        self.aec = value;
    }

    pub fn aec_value(&self) -> u16 {
        self.aec_value
    }

    pub fn set_aec_value(&mut self, value: i64) -> Result<(), ValidationError> {
        let v = check_range(value, AEC_VALUE_MIN, AEC_VALUE_MAX)?;
        self.aec_value = u16::try_from(v).map_err(|_| ValidationError::OutOfRange)?;
        Ok(())
    }

    pub fn aec2(&self) -> bool {
        self.aec2
    }

    pub fn set_aec2(&mut self, value: bool) {
        self.aec2 = value;
    }

    pub fn ae_level(&self) -> i8 {
        self.ae_level
    }

    pub fn set_ae_level(&mut self, value: i64) -> Result<(), ValidationError> {
        self.ae_level = level(value)?;
        Ok(())
    }

    pub fn dcw(&self) -> bool {
        self.dcw
    }

    pub fn set_dcw(&mut self, value: bool) {
        self.dcw = value;
    }

    pub fn bpc(&self) -> bool {
        self.bpc
    }

    pub fn set_bpc(&mut self, value: bool) {
        self.bpc = value;
    }

    pub fn wpc(&self) -> bool {
        self.wpc
    }

    pub fn set_wpc(&mut self, value: bool) {
        self.wpc = value;
    }

    pub fn raw_gma(&self) -> bool {
        self.raw_gma
    }

    pub fn set_raw_gma(&mut self, value: bool) {
        self.raw_gma = value;
    }

    pub fn lenc(&self) -> bool {
        self.lenc
    }

    pub fn set_lenc(&mut self, value: bool) {
        self.lenc = value;
    }

    pub fn special_effect(&self) -> SpecialEffect {
        self.special_effect
    }

    pub fn set_special_effect(&mut self, value: SpecialEffect) {
        self.special_effect = value;
    }
}

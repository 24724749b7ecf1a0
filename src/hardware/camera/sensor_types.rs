//! OV2640/OV3660 センサー設定で使う列挙型
//!
//! 設定ファイル上の綴りと列挙値の対応をここで一元管理します。
//! 綴りの照合は大文字小文字を区別しない完全一致のみです。

/// フレームサイズ（解像度プリセット）
///
/// 並び順はドライバーの `framesize_t` と同じく小さい解像度から大きい解像度です。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSize {
    Qqvga, // 160x120
    Qcif,  // 176x144
    Hqvga, // 240x176
    Qvga,  // 320x240
    Cif,   // 400x296
    Vga,   // 640x480
    Svga,  // 800x600
    Xga,   // 1024x768
    Sxga,  // 1280x1024
    Uxga,  // 1600x1200
    Qxga,  // 2048x1536 (OV3660のみ)
}

impl FrameSize {
    /// 全プリセット（小さい順）
    pub const ALL: [FrameSize; 11] = [
        FrameSize::Qqvga,
        FrameSize::Qcif,
        FrameSize::Hqvga,
        FrameSize::Qvga,
        FrameSize::Cif,
        FrameSize::Vga,
        FrameSize::Svga,
        FrameSize::Xga,
        FrameSize::Sxga,
        FrameSize::Uxga,
        FrameSize::Qxga,
    ];

    /// プリセット名（"VGA" など）
    pub fn preset_name(self) -> &'static str {
        match self {
            FrameSize::Qqvga => "QQVGA",
            FrameSize::Qcif => "QCIF",
            FrameSize::Hqvga => "HQVGA",
            FrameSize::Qvga => "QVGA",
            FrameSize::Cif => "CIF",
            FrameSize::Vga => "VGA",
            FrameSize::Svga => "SVGA",
            FrameSize::Xga => "XGA",
            FrameSize::Sxga => "SXGA",
            FrameSize::Uxga => "UXGA",
            FrameSize::Qxga => "QXGA",
        }
    }

    /// "幅x高さ" 形式の別名。保存・JSON出力ではこちらを使います。
    pub fn dimension_alias(self) -> &'static str {
        match self {
            FrameSize::Qqvga => "160x120",
            FrameSize::Qcif => "176x144",
            FrameSize::Hqvga => "240x176",
            FrameSize::Qvga => "320x240",
            FrameSize::Cif => "400x296",
            FrameSize::Vga => "640x480",
            FrameSize::Svga => "800x600",
            FrameSize::Xga => "1024x768",
            FrameSize::Sxga => "1280x1024",
            FrameSize::Uxga => "1600x1200",
            FrameSize::Qxga => "2048x1536",
        }
    }


    /// プリセット名または "幅x高さ" から解析します
    pub fn from_config_str(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|size| {
            value.eq_ignore_ascii_case(size.preset_name())
                || value.eq_ignore_ascii_case(size.dimension_alias())
        })
    }
}

/// ホワイトバランスモード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WbMode {
    Auto,
    Sunny,
    Cloudy,
    Office,
    Home,
}

impl WbMode {
    pub const ALL: [WbMode; 5] = [
        WbMode::Auto,
        WbMode::Sunny,
        WbMode::Cloudy,
        WbMode::Office,
        WbMode::Home,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WbMode::Auto => "auto",
            WbMode::Sunny => "sunny",
            WbMode::Cloudy => "cloudy",
            WbMode::Office => "office",
            WbMode::Home => "home",
        }
    }

    pub fn from_config_str(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| value.eq_ignore_ascii_case(mode.as_str()))
    }
}

/// 特殊効果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialEffect {
    None,
    Negative,
    Grayscale,
    RedTint,
    GreenTint,
    BlueTint,
    Sepia,
}

impl SpecialEffect {
    pub const ALL: [SpecialEffect; 7] = [
        SpecialEffect::None,
        SpecialEffect::Negative,
        SpecialEffect::Grayscale,
        SpecialEffect::RedTint,
        SpecialEffect::GreenTint,
        SpecialEffect::BlueTint,
        SpecialEffect::Sepia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SpecialEffect::None => "none",
            SpecialEffect::Negative => "negative",
            SpecialEffect::Grayscale => "grayscale",
            SpecialEffect::RedTint => "red tint",
            SpecialEffect::GreenTint => "green tint",
            SpecialEffect::BlueTint => "blue tint",
            SpecialEffect::Sepia => "sepia",
        }
    }

    pub fn from_config_str(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|effect| value.eq_ignore_ascii_case(effect.as_str()))
    }
}

/// AGCゲイン上限 (`gainceiling_t`)
///
/// 設定ファイルでは 0〜6 のコードで表します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GainCeiling {
    X2,
    X4,
    X8,
    X16,
    X32,
    X64,
    X128,
}

impl GainCeiling {
    pub const ALL: [GainCeiling; 7] = [
        GainCeiling::X2,
        GainCeiling::X4,
        GainCeiling::X8,
        GainCeiling::X16,
        GainCeiling::X32,
        GainCeiling::X64,
        GainCeiling::X128,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

/// 画像の向き
///
/// 内部ではEXIFのOrientationタグ値 (1, 6, 3, 8) で保持し、
/// 設定ファイルとJSONでは時計回りの回転角度 (0, 90, 180, 270) で表します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// 0°
    #[default]
    Normal,
    /// 90° 時計回り
    Rotate90,
    /// 180°
    Rotate180,
    /// 270° 時計回り (= 90° 反時計回り)
    Rotate270,
}

impl Orientation {
    /// 回転角度から変換します
    ///
    /// 負の角度は反時計回りとして扱い、正の角度へ正規化します。
    /// 90度単位以外の値は `None` です。
    pub fn from_rotation(degrees: i64) -> Option<Self> {
        match degrees {
            0 => Some(Orientation::Normal),
            90 | -270 => Some(Orientation::Rotate90),
            180 | -180 => Some(Orientation::Rotate180),
            270 | -90 => Some(Orientation::Rotate270),
            _ => None,
        }
    }

    /// 回転角度 (0, 90, 180, 270)
    pub fn rotation(self) -> i64 {
        match self {
            Orientation::Normal => 0,
            Orientation::Rotate90 => 90,
            Orientation::Rotate180 => 180,
            Orientation::Rotate270 => 270,
        }
    }

    /// EXIF Orientation タグ値
    pub fn exif_code(self) -> u8 {
        match self {
            Orientation::Normal => 1,
            Orientation::Rotate90 => 6,
            Orientation::Rotate180 => 3,
            Orientation::Rotate270 => 8,
        }
    }

    pub fn from_exif_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Orientation::Normal),
            6 => Some(Orientation::Rotate90),
            3 => Some(Orientation::Rotate180),
            8 => Some(Orientation::Rotate270),
            _ => None,
        }
    }
}

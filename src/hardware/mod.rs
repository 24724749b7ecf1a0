/// ハードウェア関連モジュール
pub mod camera;

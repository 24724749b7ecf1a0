/*!
 * # Camera Settings Library
 *
 * インターバル撮影カメラの設定ファイルを読み込み・検証・保存するためのライブラリ
 *
 * ## モジュール構成
 * - `core`: 設定の型、キーごとの解析・検証、一括読み込み・保存、JSON出力
 * - `hardware`: カメラセンサーの列挙型
 */

// 公開モジュール
pub mod core;
pub mod hardware;

// 内部で使用する型をまとめてエクスポート
pub use self::core::{
    apply_setting, CameraSettings, ConfigError, FileStorage, LoadOutcome, MemoryStorage,
    Orientation, SetOutcome, SettingsStorage, StorageConfig,
};
pub use self::hardware::camera::{FrameSize, GainCeiling, SpecialEffect, WbMode};

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

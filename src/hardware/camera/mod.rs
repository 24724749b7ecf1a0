/// センサー設定の列挙型
pub mod sensor_types;

pub use sensor_types::{FrameSize, GainCeiling, SpecialEffect, WbMode};

/// コアシステムモジュール
pub mod config;
pub mod config_validation;
pub mod field_registry;
pub mod kv_file;
pub mod orientation;
pub mod settings;
pub mod settings_store;
pub mod storage;

pub use config::{ConfigError, StorageConfig};
pub use field_registry::{apply_setting, find_field, FieldValue, SetOutcome, FIELDS};
pub use orientation::Orientation;
pub use settings::{CameraSettings, TZINFO_CAPACITY};
pub use settings_store::LoadOutcome;
pub use storage::{FileStorage, MemoryStorage, SettingsStorage};

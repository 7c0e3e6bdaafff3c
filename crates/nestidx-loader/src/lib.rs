pub mod config;
pub mod snapshot;

pub use config::{CONFIG_FILE_NAME, load_config_from_path, load_config_or_default};
pub use snapshot::{load_snapshot, load_snapshot_or_empty, save_snapshot};

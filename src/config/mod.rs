//! Configuration loaded from `.stylemap.toml`.

pub mod core;
pub mod loader;

pub use self::core::{OutputConfig, SeverityConfig, StylemapConfig, ThresholdsConfig};
pub use loader::{
    default_config_toml, load_config, load_config_from, load_config_near,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

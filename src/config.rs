mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path, parse_config_toml};
pub use types::{
    Config, DEFAULT_MAX_VISIBLE, DEFAULT_PLACEHOLDER, DropdownConfig, FieldConfig, FieldStyle,
    StyleConfig,
};

//! `.nac-tco.toml` configuration.
//!
//! Every section is optional. Missing sections fall back to the calculator
//! defaults, and command-line flags override whatever the file sets.

mod core;
mod loader;

pub use self::core::{
    default_vendors, ComparisonConfig, OutputConfig, RiskConfig, TcoConfig, CONFIG_FILE_NAME,
};
pub use loader::{
    default_config_toml, directory_ancestors, find_config_from, load_config,
    load_config_from_path, parse_config,
};

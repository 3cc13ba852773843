//! Tries to create an `AppConfig` from config files.
//! Uses `AppConfigBuilder` to build up configuration from a base file and an environment specific file.
//! Gets initialized with `OnceLock` so it only needs to get initialized once.

mod error;
mod types;

use std::{path::Path, sync::OnceLock};
use tracing::info;

// Re-export config structs
pub use error::{ConfigError, ConfigResult};
pub use types::{AppConfig, AppConfigBuilder, DirectoryConfig, Environment, NetConfig};

/// Allocates a static `OnceLock` containing `AppConfig`.
/// This ensures configuration only gets initialized the first time we call this function.
/// Every other caller gets a &'static ref to AppConfig.
/// Panics if anything goes wrong.
pub fn get_or_init_config() -> &'static AppConfig {
    static CONFIG_INIT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG_INIT.get_or_init(|| {
        info!("{:<20} - Initializing the configuration", "get_or_init_config");
        let base_path = std::env::current_dir().expect("Failed to determine the current DIR.");
        let config_dir = base_path.join("config");

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .unwrap_or_else(|er| panic!("Fatal Error: Parsing APP_ENVIRONMENT: {er}"));

        load_config(&config_dir, environment)
            .unwrap_or_else(|er| panic!("Fatal Error: Building config: {er}"))
    })
}

/// Reads `base.toml` and the file matching `environment` from `config_dir`
/// and merges them, later files overriding earlier ones.
pub fn load_config(config_dir: &Path, environment: Environment) -> ConfigResult<AppConfig> {
    let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

    let base_file = std::fs::File::open(config_dir.join("base.toml"))?;
    let env_file = std::fs::File::open(config_dir.join(environment_filename))?;

    AppConfig::init()
        .add_source_file(base_file)?
        .add_source_file(env_file)?
        .build()
}

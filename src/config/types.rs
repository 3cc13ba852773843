//! The configuration structs used to build the AppConfig, and their impls.
use std::{
    collections::{hash_map::Entry, HashMap},
    io::Read,
    net::SocketAddr,
    path::PathBuf,
};

use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;
use toml::Value;

use crate::config::{ConfigError, ConfigResult};

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    pub directory_config: DirectoryConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Reject signups once an activity reached `max_participants`.
    #[serde(default)]
    pub enforce_capacity: bool,
    /// Directory the front-end is served from under `/static`.
    pub static_dir: String,
}

/// Table-by-table merge of raw TOML sources before they get deserialized into `AppConfig`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct AppConfigBuilder(HashMap<String, HashMap<String, Value>>);

// ###################################
// ->   IMPLs
// ###################################
impl AppConfig {
    pub fn init() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

impl NetConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.app_port))
    }
}

impl DirectoryConfig {
    /// Resolves `static_dir` and makes sure it points to an existing directory.
    pub fn static_path(&self) -> ConfigResult<PathBuf> {
        let path = PathBuf::from(&self.static_dir);
        if path.is_dir() {
            Ok(path)
        } else {
            Err(ConfigError::StaticDirMissing(self.static_dir.clone()))
        }
    }
}

impl AppConfigBuilder {
    /// Extends this `AppConfigBuilder` with the contents of `other` builder.
    fn extend_builder(&mut self, other: Self) {
        for (entry, entry_hm) in other.0 {
            match self.0.entry(entry) {
                Entry::Vacant(e) => {
                    e.insert(entry_hm);
                }
                Entry::Occupied(mut e) => e.get_mut().extend(entry_hm),
            }
        }
    }

    pub fn add_source_file(self, mut file: std::fs::File) -> ConfigResult<Self> {
        let mut file_content = String::new();
        file.read_to_string(&mut file_content)?;

        self.add_source_str(&file_content)
    }

    pub fn add_source_str(mut self, content: &str) -> ConfigResult<Self> {
        let app_conf_builder: AppConfigBuilder = toml::from_str(content)?;
        self.extend_builder(app_conf_builder);

        Ok(self)
    }

    pub fn build(self) -> ConfigResult<AppConfig> {
        let serialized = toml::to_string(&self)?;
        let app_config = toml::from_str(&serialized)?;
        Ok(app_config)
    }
}

// ###################################
// ->   TRY FROMs
// ###################################

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail(value)),
        }
    }
}

// ###################################
// ->   TESTS
// ###################################

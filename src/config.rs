use std::path::Path;
use serde::{Serialize, Deserialize, de::DeserializeOwned};

use crate::log;

// ----------------------------------------------
// Configs
// ----------------------------------------------

pub trait Configs: Sized + Default + Serialize + DeserializeOwned {
    // Fix up or reject values after deserialization.
    fn post_load(&mut self) {
    }

    // Saves current configs to a pretty-printed JSON file.
    fn save_file(&self, config_json_path: &Path) -> bool {
        debug_assert!(!config_json_path.as_os_str().is_empty());

        // First make sure the directory exists. Ignore any errors since
        // this might fail if any element of the path already exists.
        if let Some(parent) = config_json_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(err) => {
                log::error!(log::channel!("config"), "Failed to serialize config file {config_json_path:?}: {err}");
                return false;
            }
        };

        if let Err(err) = std::fs::write(config_json_path, json) {
            log::error!(log::channel!("config"), "Failed to write config file {config_json_path:?}: {err}");
            return false;
        }

        true
    }

    // Either succeeds loading the config file or returns a default config.
    fn load_file(config_json_path: &Path) -> Self {
        debug_assert!(!config_json_path.as_os_str().is_empty());

        let json = match std::fs::read_to_string(config_json_path) {
            Ok(json) => json,
            Err(err) => {
                log::error!(log::channel!("config"), "Failed to read config file from path {config_json_path:?}: {err}");
                return Self::default();
            }
        };

        match Self::load_str(&json) {
            Ok(configs) => {
                log::info!(log::channel!("config"), "Loaded config file {config_json_path:?}.");
                configs
            }
            Err(err) => {
                log::error!(log::channel!("config"), "Failed to deserialize config file from path {config_json_path:?}: {err}");
                Self::default()
            }
        }
    }

    fn load_str(json: &str) -> Result<Self, String> {
        let mut configs: Self = serde_json::from_str(json).map_err(|err| err.to_string())?;
        configs.post_load();
        Ok(configs)
    }
}

// ----------------------------------------------
// PathfindConfigs
// ----------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)] // Missing fields in the config file get defaults from PathfindConfigs::default().
pub struct PathfindConfigs {
    // Nearest free tile search (weighted variant) edge costs:
    pub free_tile_cost: f32,
    pub occupied_tile_cost: f32,

    // Debug Log:
    pub log_level: log::Level,
}

impl Default for PathfindConfigs {
    fn default() -> Self {
        Self {
            free_tile_cost: 1.0,
            occupied_tile_cost: 2.0,
            log_level: log::Level::Verbose,
        }
    }
}

impl Configs for PathfindConfigs {
    fn post_load(&mut self) {
        let defaults = Self::default();

        if !self.free_tile_cost.is_finite() || self.free_tile_cost <= 0.0 {
            log::warn!(log::channel!("config"), "Invalid free_tile_cost {}, using {}.", self.free_tile_cost, defaults.free_tile_cost);
            self.free_tile_cost = defaults.free_tile_cost;
        }

        if !self.occupied_tile_cost.is_finite() || self.occupied_tile_cost <= 0.0 {
            log::warn!(log::channel!("config"), "Invalid occupied_tile_cost {}, using {}.", self.occupied_tile_cost, defaults.occupied_tile_cost);
            self.occupied_tile_cost = defaults.occupied_tile_cost;
        }

        // Crossing an occupied tile must never be cheaper than walking around it.
        if self.occupied_tile_cost < self.free_tile_cost {
            log::warn!(log::channel!("config"), "occupied_tile_cost {} is below free_tile_cost {}, raising it.", self.occupied_tile_cost, self.free_tile_cost);
            self.occupied_tile_cost = self.free_tile_cost;
        }
    }
}

// ----------------------------------------------
// Unit Tests
// ----------------------------------------------

use crate::core::store::DEFAULT_STORAGE_KEY;
use crate::core::tracker::TrackerSettings;
use crate::errors::{AppError, AppResult};
use crate::map::{DEFAULT_ZOOM, OSM_ATTRIBUTION, OSM_TILE_URL};
use crate::models::coords::Coords;
use crate::utils::path::resolve;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_tile_attribution")]
    pub tile_attribution: String,
    /// "LAT,LNG" reported as the current position.
    #[serde(default)]
    pub home_position: Option<String>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
fn default_map_zoom() -> u8 {
    DEFAULT_ZOOM
}
fn default_tile_url() -> String {
    OSM_TILE_URL.to_string()
}
fn default_tile_attribution() -> String {
    OSM_ATTRIBUTION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file().to_string_lossy().to_string())
    }
}

impl Config {
    fn with_database(database: String) -> Self {
        Self {
            database,
            storage_key: default_storage_key(),
            map_zoom: default_map_zoom(),
            tile_url: default_tile_url(),
            tile_attribution: default_tile_attribution(),
            home_position: None,
        }
    }

    /// Return the configuration directory (`~/.rworkouts`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworkouts")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkouts.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworkouts.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Files written by older versions get their missing keys filled in.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        migrate::upgrade_config_file(&path)?;

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Write this configuration to the config file.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize the config directory and file. Returns the database path.
    ///
    /// In test mode the config file is left alone.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => resolve(&name, &dir),
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path.to_string_lossy().to_string());

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config.database)
    }

    /// Parsed `home_position`, if configured.
    pub fn home_coords(&self) -> AppResult<Option<Coords>> {
        self.home_position
            .as_deref()
            .map(Coords::parse)
            .transpose()
    }

    pub fn tracker_settings(&self) -> TrackerSettings {
        TrackerSettings {
            zoom: self.map_zoom,
            tile_url: self.tile_url.clone(),
            attribution: self.tile_attribution.clone(),
            storage_key: self.storage_key.clone(),
        }
    }
}

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct TableConfig {
    pub symbols: HashMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct TableRegistry {
    pub tables: HashMap<String, TableConfig>,
}

impl TableRegistry {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../codons.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in tables
    /// 2. Override with ~/.config/helix-text/codons.toml if it exists
    /// 3. Override with ./codons.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        // Try to load user config from ~/.config/helix-text/codons.toml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("helix-text").join("codons.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => {
                        config.merge(user_config);
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        // Try to load local config from ./codons.toml
        let local_config_path = std::path::Path::new("codons.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => {
                    config.merge(local_config);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(config)
    }

    /// Merge another registry into this one, overriding existing tables
    pub fn merge(&mut self, other: TableRegistry) {
        for (name, table) in other.tables {
            self.tables.insert(name, table);
        }
    }

    pub fn get_table(&self, name: &str) -> Option<&TableConfig> {
        self.tables.get(name)
    }
}

use crate::types::TableFormat;
use anyhow::{Context, Result};
use healthsplit_types::Category;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Optional settings file. Command-line flags win over every value here.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Directory table files are written to
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub output_format: Option<TableFormat>,

    #[serde(default)]
    pub skip_empty: bool,

    /// Per-category file stem overrides, keyed by category name
    #[serde(default)]
    pub file_stems: BTreeMap<String, String>,
}

impl Config {
    /// Load from an explicit path, or from the default location if none is given
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Self::load_from(path)
            }
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/healthsplit/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("healthsplit").join("config.toml"))
    }

    /// File stem for a category's table, honoring overrides
    pub fn file_stem(&self, category: Category) -> &str {
        self.file_stems
            .get(category.as_str())
            .map(String::as_str)
            .unwrap_or_else(|| category.default_file_stem())
    }

    fn validate(&self) -> Result<()> {
        for (key, stem) in &self.file_stems {
            let category = key
                .parse::<Category>()
                .with_context(|| format!("Invalid [file_stems] key: {}", key))?;
            if key != category.as_str() {
                anyhow::bail!(
                    "Invalid [file_stems] key: {} (write it as {})",
                    key,
                    category.as_str()
                );
            }
            if stem.is_empty() || stem.contains(['/', '\\']) {
                anyhow::bail!("Invalid file stem for {}: {:?}", key, stem);
            }
        }

        // Two categories sharing a stem would overwrite each other's file
        let mut seen: BTreeMap<&str, Category> = BTreeMap::new();
        for category in Category::ALL {
            let stem = self.file_stem(category);
            if let Some(previous) = seen.insert(stem, category) {
                anyhow::bail!(
                    "File stem {:?} is used by both {} and {}",
                    stem,
                    previous,
                    category
                );
            }
        }
        Ok(())
    }
}

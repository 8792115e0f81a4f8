use crate::core::{Catalog, Size, Viewport, TASKBAR_HEIGHT};
use anyhow::{Context, Result};
use fusuma_ipc::AppId;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub viewport: ViewportConfig,
    pub taskbar_height: u32,
    pub apps: HashMap<AppId, AppOverride>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Per-application presentation overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppOverride {
    pub title: Option<String>,
    pub default_size: Option<[u32; 2]>,
    pub title_bar_color: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            taskbar_height: TASKBAR_HEIGHT,
            apps: HashMap::new(),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fusuma").join("config.json"))
    }

    /// Loads `path`, or the default location when none is given. A missing
    /// default file means built-in defaults; a missing explicit file is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    tracing::debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.viewport.width,
            height: self.viewport.height,
            taskbar_height: self.taskbar_height,
        }
    }

    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::builtin();
        for (app_id, app) in &self.apps {
            let Some(descriptor) = catalog.descriptor_mut(*app_id) else {
                tracing::warn!("Ignoring override for alias {}", app_id);
                continue;
            };
            if let Some(title) = &app.title {
                descriptor.title = title.clone();
            }
            if let Some([width, height]) = app.default_size {
                descriptor.default_size = Size::new(width, height);
            }
            if let Some(color) = &app.title_bar_color {
                descriptor.title_bar_color = color.clone();
            }
        }
        catalog
    }
}

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::geometry::SimplifyMode;
use crate::geometry::simplify::{DEFAULT_STRIDE_TARGET, DEFAULT_TOLERANCE, REGION_TOLERANCE};
use crate::region::MergeOptions;

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}
fn default_region_tolerance() -> f64 {
    REGION_TOLERANCE
}
fn default_stride_target() -> usize {
    DEFAULT_STRIDE_TARGET
}
fn default_lossy_names() -> bool {
    true
}
fn default_verbose() -> bool {
    false
}

/// Settings read from `topo2geo.toml`. Command-line flags take precedence.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Topology object to decode; the first object when unset
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub simplify: SimplifyMode,
    /// Distance tolerance in degrees for whole-file and devolved outputs
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Distance tolerance in degrees for English region splits
    #[serde(default = "default_region_tolerance")]
    pub region_tolerance: f64,
    #[serde(default = "default_stride_target")]
    pub stride_target: usize,
    /// Round decoded coordinates to this many decimal places
    #[serde(default)]
    pub precision: Option<u32>,
    /// Allow substring name matching when no region matches exactly
    #[serde(default = "default_lossy_names")]
    pub lossy_names: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub merge: MergeOptions,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            object: None,
            simplify: SimplifyMode::default(),
            tolerance: default_tolerance(),
            region_tolerance: default_region_tolerance(),
            stride_target: default_stride_target(),
            precision: None,
            lossy_names: default_lossy_names(),
            verbose: default_verbose(),
            merge: MergeOptions::default(),
        }
    }
}

impl FileConfig {
    /// Search the standard locations and return the first config that parses.
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                // Runs before logging is initialized, so report straight to stderr.
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly named config file. Unlike [`FileConfig::load`],
    /// a missing or malformed file is an error.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("topo2geo.toml"));
    paths.push(PathBuf::from(".topo2geo.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("topo2geo").join("config.toml"));
        paths.push(config_dir.join("topo2geo.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".topo2geo.toml"));
    }

    paths
}

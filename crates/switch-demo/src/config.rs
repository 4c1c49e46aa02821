//! Demo configuration
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/sound-switch/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use switch_core::{Orientation, Rgba, StyleOverrides, SwitchConfig};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Switches shown in the window, top to bottom
    pub switches: Vec<SwitchEntry>,
}

/// One labelled switch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchEntry {
    pub label: String,
    #[serde(flatten)]
    pub switch: SwitchConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            switches: vec![
                SwitchEntry {
                    label: "Filter slope".to_string(),
                    switch: SwitchConfig::new(Orientation::Horizontal, 5)
                        .with_track(200.0, 28.0)
                        .with_inner_thickness(24.0)
                        .with_padding(2.0)
                        .with_position(2),
                },
                SwitchEntry {
                    label: "Range".to_string(),
                    switch: SwitchConfig::new(Orientation::Vertical, 3)
                        .with_track(96.0, 28.0)
                        .with_inner_thickness(24.0)
                        .with_padding(2.0)
                        .with_inner_style(
                            StyleOverrides::default().with_background(Rgba::rgb(0.9, 0.5, 0.2)),
                        ),
                },
            ],
        }
    }
}

impl DemoConfig {
    /// Check every switch can be laid out
    pub fn validate(&self) -> Result<()> {
        for entry in &self.switches {
            entry
                .switch
                .validate()
                .with_context(|| format!("Invalid switch '{}'", entry.label))?;
        }
        Ok(())
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/sound-switch/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("sound-switch")
        .join("config.yaml")
}

/// Read the switch list from `path`
///
/// A missing file yields the built-in switches. A file that exists must
/// parse and validate: a bad orientation or position count is a
/// configuration error, never silently replaced by defaults.
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No switch config at {:?}, using built-in switches", path);
            return Ok(DemoConfig::default());
        }
        Err(e) => return Err(e).with_context(|| format!("Cannot read {:?}", path)),
    };

    let config: DemoConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Cannot parse switch config {:?}", path))?;
    config
        .validate()
        .with_context(|| format!("Bad switch config {:?}", path))?;

    log::info!("Loaded {} switches from {:?}", config.switches.len(), path);
    Ok(config)
}

/// Write `config` to `path` as YAML, creating the directory if needed
pub fn save_config(config: &DemoConfig, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("Cannot create {:?}", dir))?;
    }

    let yaml = serde_yaml::to_string(config).context("Cannot serialize switch config")?;
    std::fs::write(path, yaml).with_context(|| format!("Cannot write {:?}", path))?;

    log::info!("Wrote {} switches to {:?}", config.switches.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.switches.len(), 2);
        assert_eq!(config.switches[0].switch.orientation, Orientation::Horizontal);
        assert_eq!(config.switches[1].switch.orientation, Orientation::Vertical);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_entries() {
        let yaml = r#"
switches:
  - label: Mode
    position: 1
    thickness: 20
    length: 120
    orientation: vertical
    num_positions: 4
    inner_thickness: 12
    padding: 3
    inner_style:
      opacity: 0.9
"#;
        let config: DemoConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.switches.len(), 1);
        let entry = &config.switches[0];
        assert_eq!(entry.label, "Mode");
        assert_eq!(entry.switch.num_positions, 4);
        assert_eq!(entry.switch.padding, 3.0);
        assert_eq!(entry.switch.inner_style.opacity, Some(0.9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_rejects_invalid_orientation() {
        let yaml = r#"
switches:
  - label: Broken
    position: 0
    thickness: 20
    length: 120
    orientation: diagonal
    num_positions: 4
    inner_thickness: 12
"#;
        assert!(serde_yaml::from_str::<DemoConfig>(yaml).is_err());
    }

    #[test]
    fn test_validate_reports_label() {
        let mut config = DemoConfig::default();
        config.switches[0].switch.num_positions = 1;
        let err = config.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid switch 'Filter slope'"));
        assert!(format!("{:#}", err).contains("at least 2 positions"));
    }

    /// Scratch directory unique to one test
    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sound-switch-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("config.yaml");

        save_config(&DemoConfig::default(), &path).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.switches.len(), 2);
        assert_eq!(loaded.switches[0].switch, DemoConfig::default().switches[0].switch);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/sound-switch/config.yaml")).unwrap();
        assert_eq!(config.switches.len(), 2);
    }

    #[test]
    fn test_load_rejects_invalid_orientation() {
        let dir = scratch_dir("diagonal");
        let path = dir.join("config.yaml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            &path,
            r#"
switches:
  - label: Broken
    position: 0
    thickness: 20
    length: 120
    orientation: diagonal
    num_positions: 4
    inner_thickness: 12
"#,
        )
        .unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid orientation: diagonal"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_rejects_single_position() {
        let dir = scratch_dir("single");
        let path = dir.join("config.yaml");
        let mut config = DemoConfig::default();
        config.switches[1].switch.num_positions = 1;
        save_config(&config, &path).unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid switch 'Range'"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}

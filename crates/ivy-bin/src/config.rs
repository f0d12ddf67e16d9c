use anyhow::Result;
use ivy_rhythm::JudgeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "ivy_config.json";

/// Simulator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Simulated frames per second.
    pub frame_rate: u32,
    pub judge_mode: JudgeMode,
    /// Hard stop for sessions that never finish (e.g. no taps at all).
    pub max_duration_secs: f64,
    /// Seed for shuffles and reactions; random when unset.
    pub seed: Option<u64>,
    /// Log every event, not just the summary.
    pub log_events: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            judge_mode: JudgeMode::SinceLastBeat,
            max_duration_secs: 600.0,
            seed: None,
            log_events: true,
        }
    }
}

impl SimConfig {
    /// Loads config from a specified path.
    /// Returns default config if file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a specified path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Seconds per simulated frame. A frame rate of 0 is treated as 1.
    pub fn frame_step(&self) -> f64 {
        1.0 / f64::from(self.frame_rate.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = SimConfig::default();
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.judge_mode, JudgeMode::SinceLastBeat);
        assert_eq!(config.max_duration_secs, 600.0);
        assert!(config.seed.is_none());
        assert!(config.log_events);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{"frame_rate": 120, "judge_mode": "NearestBeat"}"#).unwrap();
        assert_eq!(config.frame_rate, 120);
        assert_eq!(config.judge_mode, JudgeMode::NearestBeat);
        assert_eq!(config.max_duration_secs, 600.0);
    }

    #[test]
    fn test_file_io() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.json");

        let config = SimConfig {
            frame_rate: 30,
            judge_mode: JudgeMode::NearestBeat,
            max_duration_secs: 45.0,
            seed: Some(99),
            log_events: false,
        };

        config.save_to(&file_path).unwrap();
        let loaded = SimConfig::load_from(&file_path).unwrap();

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nonexistent.json");

        let config = SimConfig::load_from(&file_path).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_frame_step() {
        let config = SimConfig {
            frame_rate: 0,
            ..Default::default()
        };
        assert_eq!(config.frame_step(), 1.0);
        assert!((SimConfig::default().frame_step() - 1.0 / 60.0).abs() < 1e-12);
    }
}

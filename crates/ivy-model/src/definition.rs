use serde::{Deserialize, Serialize};

use crate::playback::PlaybackMode;

/// An animal that can be befriended through the rhythm minigame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimalDefinition {
    pub id: String,
    pub display_name: String,
    /// Pattern ids, resolved against the catalog at start.
    pub patterns: Vec<String>,
    pub playback_mode: PlaybackMode,
    /// Animator state played on the animal after a good step.
    pub good_anim: String,
    /// Animator state played on the animal after a missed step.
    pub bad_anim: String,
    /// Companion reaction states; one is picked at random per good step.
    pub reactions: Vec<String>,
    /// Loop played as background music while the minigame runs.
    pub loop_sfx: Option<String>,
    /// Archive progress granted when trust ends at the maximum.
    pub archive_reward: u32,
}

impl Default for AnimalDefinition {
    fn default() -> Self {
        Self {
            id: String::new(),
            display_name: String::new(),
            patterns: Vec::new(),
            playback_mode: PlaybackMode::default(),
            good_anim: "Good".to_string(),
            bad_anim: "Bad".to_string(),
            reactions: Vec::new(),
            loop_sfx: None,
            archive_reward: 0,
        }
    }
}

/// A crop grown through the rhythm minigame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantDefinition {
    pub id: String,
    pub display_name: String,
    pub patterns: Vec<String>,
    pub playback_mode: PlaybackMode,
    pub music_loop: Option<String>,
    /// Effect spawned at the plot after a good step.
    pub success_vfx: Option<String>,
    /// Item harvested at the end; no harvest when unset.
    pub yield_item: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animal_deserialize_fills_defaults() {
        let json = r#"{"id":"goat","patterns":["walk"]}"#;
        let def: AnimalDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.id, "goat");
        assert_eq!(def.patterns, vec!["walk".to_string()]);
        assert_eq!(def.playback_mode, PlaybackMode::Sequential);
        assert_eq!(def.good_anim, "Good");
        assert_eq!(def.bad_anim, "Bad");
        assert!(def.reactions.is_empty());
        assert_eq!(def.loop_sfx, None);
    }

    #[test]
    fn plant_deserialize_fills_defaults() {
        let json = r#"{"id":"turnip","yield_item":"turnip"}"#;
        let def: PlantDefinition = serde_json::from_str(json).unwrap();
        assert!(def.patterns.is_empty());
        assert_eq!(def.success_vfx, None);
        assert_eq!(def.yield_item.as_deref(), Some("turnip"));
    }
}

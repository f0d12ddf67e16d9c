use ivy_model::{Catalog, PlaybackMode, PlantDefinition, RhythmPattern};
use log::{info, warn};
use rand::RngCore;

use super::{JudgedStep, Minigame};
use crate::error::StartError;
use crate::event::{Cue, Reward};

pub const PLANT_GOOD_TRUST: f32 = 11.0;
pub const PLANT_MISS_TRUST: f32 = -4.0;

/// Growth stages cycled through by consecutive steps.
pub const PLANT_STAGE_COUNT: usize = 3;

/// Harvest size for a final care score: 3 at 90+, 2 at 60+, 1 at 30+, else 0.
pub fn yield_for(trust: f32) -> u32 {
    if trust >= 90.0 {
        3
    } else if trust >= 60.0 {
        2
    } else if trust >= 30.0 {
        1
    } else {
        0
    }
}

/// Tend a plot: each step raises or lowers a growth stage, and the care
/// score accumulated over the playlist sets the harvest.
#[derive(Debug, Clone)]
pub struct PlantMinigame {
    definition: Option<PlantDefinition>,
    patterns: Vec<RhythmPattern>,
    stages: [bool; PLANT_STAGE_COUNT],
}

impl PlantMinigame {
    pub fn new(definition: PlantDefinition, patterns: Vec<RhythmPattern>) -> Self {
        Self {
            definition: Some(definition),
            patterns,
            stages: [false; PLANT_STAGE_COUNT],
        }
    }

    pub fn from_catalog(catalog: &Catalog, plant_id: &str) -> Self {
        match catalog.plant(plant_id) {
            Some(def) => Self::new(def.clone(), catalog.resolve(&def.patterns)),
            None => Self {
                definition: None,
                patterns: Vec::new(),
                stages: [false; PLANT_STAGE_COUNT],
            },
        }
    }

    pub fn definition(&self) -> Option<&PlantDefinition> {
        self.definition.as_ref()
    }

    /// Raised state of each growth stage.
    pub fn stages(&self) -> [bool; PLANT_STAGE_COUNT] {
        self.stages
    }
}

impl Minigame for PlantMinigame {
    fn name(&self) -> &str {
        "PlantRhythm"
    }

    fn on_start(&mut self, cues: &mut Vec<Cue>) -> Result<(), StartError> {
        let Some(def) = &self.definition else {
            warn!("[{}] Missing PlantDefinition", self.name());
            return Err(StartError::MissingDefinition {
                minigame: self.name().to_string(),
            });
        };

        self.stages = [false; PLANT_STAGE_COUNT];
        for stage in 0..PLANT_STAGE_COUNT {
            cues.push(Cue::SetStage {
                stage,
                raised: false,
            });
        }
        if let Some(clip) = &def.music_loop {
            cues.push(Cue::PlayMusic { clip: clip.clone() });
        }
        Ok(())
    }

    fn patterns(&self) -> &[RhythmPattern] {
        &self.patterns
    }

    fn playback_mode(&self) -> PlaybackMode {
        self.definition
            .as_ref()
            .map(|d| d.playback_mode)
            .unwrap_or_default()
    }

    fn on_step_judged(
        &mut self,
        judged: &JudgedStep,
        _rng: &mut dyn RngCore,
        cues: &mut Vec<Cue>,
    ) -> f32 {
        let good = judged.verdict.is_good();
        let stage = judged.step_index % PLANT_STAGE_COUNT;
        self.stages[stage] = good;
        cues.push(Cue::SetStage {
            stage,
            raised: good,
        });

        if good {
            let vfx = self
                .definition
                .as_ref()
                .and_then(|d| d.success_vfx.clone());
            if let Some(name) = vfx {
                cues.push(Cue::SpawnVfx { name });
            }
            PLANT_GOOD_TRUST
        } else {
            PLANT_MISS_TRUST
        }
    }

    fn on_playlist_complete(&mut self, trust: f32) -> Reward {
        let quantity = yield_for(trust);
        let item = self.definition.as_ref().and_then(|d| d.yield_item.clone());
        match item {
            Some(item) if quantity > 0 => {
                info!("[{}] Harvested {quantity} x {item}", self.name());
                Reward::Harvest { item, quantity }
            }
            _ => Reward::None,
        }
    }
}

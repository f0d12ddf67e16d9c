use ivy_model::{AnimalDefinition, Catalog, PlaybackMode, RhythmPattern};
use log::{info, warn};
use rand::RngCore;
use rand::seq::SliceRandom;

use super::{JudgedStep, Minigame};
use crate::error::StartError;
use crate::event::{Cue, CueTarget, Reward};
use crate::trust::TrustMeter;

pub const ANIMAL_GOOD_TRUST: f32 = 12.0;
pub const ANIMAL_MISS_TRUST: f32 = -5.0;

/// Befriend an animal: every good step builds trust, and only a perfect
/// trust score at the end unlocks archive progress.
#[derive(Debug, Clone)]
pub struct AnimalMinigame {
    definition: Option<AnimalDefinition>,
    patterns: Vec<RhythmPattern>,
}

impl AnimalMinigame {
    pub fn new(definition: AnimalDefinition, patterns: Vec<RhythmPattern>) -> Self {
        Self {
            definition: Some(definition),
            patterns,
        }
    }

    /// Resolve the animal and its patterns from the catalog. A missing animal
    /// yields a minigame that refuses to start.
    pub fn from_catalog(catalog: &Catalog, animal_id: &str) -> Self {
        match catalog.animal(animal_id) {
            Some(def) => Self::new(def.clone(), catalog.resolve(&def.patterns)),
            None => Self {
                definition: None,
                patterns: Vec::new(),
            },
        }
    }

    pub fn definition(&self) -> Option<&AnimalDefinition> {
        self.definition.as_ref()
    }
}

impl Minigame for AnimalMinigame {
    fn name(&self) -> &str {
        "AnimalRhythm"
    }

    fn on_start(&mut self, cues: &mut Vec<Cue>) -> Result<(), StartError> {
        let Some(def) = &self.definition else {
            warn!("[{}] Missing AnimalDefinition", self.name());
            return Err(StartError::MissingDefinition {
                minigame: self.name().to_string(),
            });
        };
        if let Some(clip) = &def.loop_sfx {
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
        rng: &mut dyn RngCore,
        cues: &mut Vec<Cue>,
    ) -> f32 {
        let Some(def) = &self.definition else {
            return 0.0;
        };

        if judged.verdict.is_good() {
            if !def.good_anim.is_empty() {
                cues.push(Cue::Animate {
                    target: CueTarget::Subject,
                    state: def.good_anim.clone(),
                });
            }
            if let Some(reaction) = def.reactions.choose(rng) {
                if !reaction.is_empty() {
                    cues.push(Cue::Animate {
                        target: CueTarget::Companion,
                        state: reaction.clone(),
                    });
                }
            }
            ANIMAL_GOOD_TRUST
        } else {
            if !def.bad_anim.is_empty() {
                cues.push(Cue::Animate {
                    target: CueTarget::Subject,
                    state: def.bad_anim.clone(),
                });
            }
            ANIMAL_MISS_TRUST
        }
    }

    fn on_playlist_complete(&mut self, trust: f32) -> Reward {
        let Some(def) = &self.definition else {
            return Reward::None;
        };
        if trust >= TrustMeter::MAX {
            info!("[{}] {} trusts you", self.name(), def.display_name);
            Reward::ArchiveProgress {
                amount: def.archive_reward,
            }
        } else {
            Reward::None
        }
    }
}

#[cfg(test)]
mod tests {
    use ivy_model::Step;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::judge::Verdict;

    fn goat() -> AnimalDefinition {
        AnimalDefinition {
            id: "goat".to_string(),
            display_name: "Goat".to_string(),
            good_anim: "Nuzzle".to_string(),
            bad_anim: "Flinch".to_string(),
            reactions: vec!["Wave".to_string()],
            loop_sfx: Some("goat_loop".to_string()),
            archive_reward: 3,
            ..Default::default()
        }
    }

    fn judged(verdict: Verdict) -> JudgedStep {
        JudgedStep {
            step: Step::tap(),
            step_index: 0,
            pattern_index: 0,
            verdict,
        }
    }

    #[test]
    fn start_plays_loop_music() {
        let mut game = AnimalMinigame::new(goat(), vec![RhythmPattern::new("a")]);
        let mut cues = Vec::new();
        game.on_start(&mut cues).unwrap();
        assert_eq!(
            cues,
            vec![Cue::PlayMusic {
                clip: "goat_loop".to_string()
            }]
        );
    }

    #[test]
    fn missing_definition_refuses_start() {
        let catalog = Catalog::default();
        let mut game = AnimalMinigame::from_catalog(&catalog, "goat");
        let mut cues = Vec::new();
        assert!(matches!(
            game.on_start(&mut cues),
            Err(StartError::MissingDefinition { .. })
        ));
        assert!(cues.is_empty());
    }

    #[test]
    fn good_step_animates_both_characters() {
        let mut game = AnimalMinigame::new(goat(), vec![]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut cues = Vec::new();
        let delta = game.on_step_judged(&judged(Verdict::Good), &mut rng, &mut cues);
        assert_eq!(delta, ANIMAL_GOOD_TRUST);
        assert_eq!(
            cues,
            vec![
                Cue::Animate {
                    target: CueTarget::Subject,
                    state: "Nuzzle".to_string()
                },
                Cue::Animate {
                    target: CueTarget::Companion,
                    state: "Wave".to_string()
                },
            ]
        );
    }

    #[test]
    fn miss_step_plays_bad_anim() {
        let mut game = AnimalMinigame::new(goat(), vec![]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut cues = Vec::new();
        let delta = game.on_step_judged(&judged(Verdict::Miss), &mut rng, &mut cues);
        assert_eq!(delta, ANIMAL_MISS_TRUST);
        assert_eq!(
            cues,
            vec![Cue::Animate {
                target: CueTarget::Subject,
                state: "Flinch".to_string()
            }]
        );
    }

    #[test]
    fn empty_reaction_is_skipped() {
        let def = AnimalDefinition {
            reactions: vec![String::new()],
            good_anim: String::new(),
            ..goat()
        };
        let mut game = AnimalMinigame::new(def, vec![]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut cues = Vec::new();
        game.on_step_judged(&judged(Verdict::Good), &mut rng, &mut cues);
        assert!(cues.is_empty());
    }

    #[test]
    fn reward_only_at_full_trust() {
        let mut game = AnimalMinigame::new(goat(), vec![]);
        assert_eq!(game.on_playlist_complete(99.0), Reward::None);
        assert_eq!(
            game.on_playlist_complete(100.0),
            Reward::ArchiveProgress { amount: 3 }
        );
    }
}

// Rhythm pattern data, minigame definitions and catalog loading

mod catalog;
mod definition;
mod error;
mod pattern;
mod playback;

pub use catalog::Catalog;
pub use definition::{AnimalDefinition, PlantDefinition};
pub use error::CatalogError;
pub use pattern::{PatternIssue, RhythmPattern, Step, StepType};
pub use playback::PlaybackMode;

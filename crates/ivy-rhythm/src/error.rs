use thiserror::Error;

/// Why a session refused to start.
///
/// The session's own state is unchanged in every case. A minigame may already
/// have reset its presentation state in `on_start` before the playlist check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("Session is already running")]
    AlreadyRunning,

    #[error("{minigame}: missing definition")]
    MissingDefinition { minigame: String },

    #[error("{minigame}: no playable patterns")]
    EmptyPlaylist { minigame: String },
}

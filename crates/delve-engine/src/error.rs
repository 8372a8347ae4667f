//! Error types for the expedition binary.
//!
//! [`EngineError`] wraps every failure mode of startup and the scripted
//! expedition. Rule refusals from the action engine are not errors; they
//! are logged and the expedition carries on.

/// Top-level error for the expedition binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: delve_actions::ConfigError,
    },

    /// Building or linking the world failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: delve_world::WorldError,
    },

    /// The party could not be found where the expedition left it.
    #[error("party lost: {message}")]
    PartyLost {
        /// What was expected and where.
        message: String,
    },
}

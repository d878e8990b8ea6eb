//! Error types for the Discord bot.

use pickcourse_core::{ConfigError, SubmitterError};
use thiserror::Error;

/// Errors that can occur while starting or running the Discord bot.
#[derive(Debug, Error)]
pub enum DiscordError {
    /// Bot token not provided.
    #[error("Discord bot token not set. Set DISCORD_TOKEN (or TOKEN) environment variable.")]
    NoToken,

    /// Invalid startup configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The review pipeline could not be built.
    #[error(transparent)]
    Submitter(#[from] SubmitterError),

    /// The Discord client failed.
    #[error("Discord client error: {0}")]
    Client(String),
}

/// Result type for Discord operations.
pub type Result<T> = std::result::Result<T, DiscordError>;

impl From<serenity::Error> for DiscordError {
    fn from(e: serenity::Error) -> Self {
        DiscordError::Client(e.to_string())
    }
}

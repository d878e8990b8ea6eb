//! Discord client setup.

use std::sync::Arc;

use pickcourse_core::{BotConfig, FormSubmitter};
use serenity::model::gateway::GatewayIntents;
use serenity::Client;
use tracing::info;

use crate::error::{DiscordError, Result};
use crate::handler::ReviewHandler;

/// Primary token variable.
pub const TOKEN_ENV: &str = "DISCORD_TOKEN";

/// Legacy token variable, still accepted.
pub const LEGACY_TOKEN_ENV: &str = "TOKEN";

/// The PickCourse review bot.
pub struct DiscordBot {
    token: String,
    config: BotConfig,
    submitter: Arc<FormSubmitter>,
}

impl DiscordBot {
    /// Create a bot using the token from the environment.
    ///
    /// Requires `DISCORD_TOKEN` (or `TOKEN`) to be set.
    pub fn new(config: BotConfig) -> Result<Self> {
        let token = token_from_env().ok_or(DiscordError::NoToken)?;
        Self::with_token(token, config)
    }

    /// Create a bot with an explicit token.
    pub fn with_token(token: impl Into<String>, config: BotConfig) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(DiscordError::NoToken);
        }
        let submitter = Arc::new(FormSubmitter::from_config(&config)?);

        Ok(Self {
            token,
            config,
            submitter,
        })
    }

    /// Gateway events the bot subscribes to.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS
    }

    /// Connect to Discord and process events until the connection ends.
    pub async fn start(self) -> Result<()> {
        info!(
            endpoint = %self.config.review_endpoint(),
            review_channel = %self.config.review_channel,
            welcome_channel = %self.config.welcome_channel,
            "Starting Discord bot"
        );

        let handler = ReviewHandler::new(self.config, self.submitter);
        let mut client = Client::builder(&self.token, Self::intents())
            .event_handler(handler)
            .await?;

        client.start().await?;
        info!("Discord client stopped");
        Ok(())
    }
}

/// Read the bot token, preferring `DISCORD_TOKEN` over `TOKEN`.
pub fn token_from_env() -> Option<String> {
    [TOKEN_ENV, LEGACY_TOKEN_ENV]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

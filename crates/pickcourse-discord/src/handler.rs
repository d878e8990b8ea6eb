//! Gateway event routing.
//!
//! Each event is handled independently; the handler only holds immutable
//! configuration and the shared review pipeline.

use std::sync::Arc;

use pickcourse_core::{handle_member_join, handle_review_submission, BotConfig, FormSubmitter};
use serenity::async_trait;
use serenity::builder::CreateInteractionResponse;
use serenity::client::{Context, EventHandler};
use serenity::model::application::{Command, CommandInteraction, Interaction, ModalInteraction};
use serenity::model::gateway::Ready;
use serenity::model::guild::Member;
use serenity::model::mention::Mentionable;
use tracing::{debug, error, info, warn};

use crate::modal;
use crate::surface::DiscordSurface;

/// Event handler for the review bot.
pub struct ReviewHandler {
    config: BotConfig,
    submitter: Arc<FormSubmitter>,
}

impl ReviewHandler {
    pub fn new(config: BotConfig, submitter: Arc<FormSubmitter>) -> Self {
        Self { config, submitter }
    }

    async fn open_form(&self, ctx: &Context, command: &CommandInteraction) {
        let response = CreateInteractionResponse::Modal(modal::review_modal());
        if let Err(e) = command.create_response(&ctx.http, response).await {
            warn!(user = %command.user.name, error = %e, "Failed to open review form");
        }
    }

    async fn submit_form(&self, ctx: &Context, interaction: ModalInteraction) {
        let raw = modal::raw_fields(&interaction);
        let mention = interaction.user.mention().to_string();
        let user = interaction.user.name.clone();

        let surface = DiscordSurface::for_modal(Arc::clone(&ctx.http), interaction).await;
        let result = handle_review_submission(
            &self.submitter,
            &surface,
            &raw,
            &mention,
            &self.config.review_channel,
        )
        .await;

        info!(user = %user, success = result.is_success(), "Handled review form");
    }
}

#[async_trait]
impl EventHandler for ReviewHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, guilds = ready.guilds.len(), "Connected to Discord");

        match Command::create_global_command(&ctx.http, modal::review_command()).await {
            Ok(command) => info!(command = %command.name, "Registered slash command"),
            Err(e) => error!(error = %e, "Failed to register slash command"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) if command.data.name == modal::COMMAND_NAME => {
                self.open_form(&ctx, &command).await;
            }
            Interaction::Modal(submitted) if submitted.data.custom_id == modal::MODAL_ID => {
                self.submit_form(&ctx, submitted).await;
            }
            other => debug!(kind = ?other.kind(), "Ignoring interaction"),
        }
    }

    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        let surface = DiscordSurface::for_guild(Arc::clone(&ctx.http), new_member.guild_id);
        let mention = new_member.user.mention().to_string();

        handle_member_join(
            &surface,
            &mention,
            &self.config.welcome_channel,
            &self.config.review_channel,
        )
        .await;
    }
}

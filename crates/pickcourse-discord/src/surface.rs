//! [`ChatSurface`] implementation over the Discord HTTP API.

use std::sync::Arc;

use async_trait::async_trait;
use pickcourse_core::{ChannelRef, ChatSurface, SurfaceError};
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
    EditInteractionResponse,
};
use serenity::http::Http;
use serenity::model::application::ModalInteraction;
use serenity::model::channel::ChannelType;
use serenity::model::id::{ChannelId, GuildId};
use tracing::warn;

/// Discord view of one interaction or guild event.
pub struct DiscordSurface {
    http: Arc<Http>,
    guild_id: Option<GuildId>,
    modal: Option<ModalInteraction>,
    deferred: bool,
}

impl DiscordSurface {
    /// Surface for a guild event with nobody to reply to (member joins).
    pub fn for_guild(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self {
            http,
            guild_id: Some(guild_id),
            modal: None,
            deferred: false,
        }
    }

    /// Surface for a submitted modal.
    ///
    /// The interaction is deferred right away as an ephemeral response so
    /// the review API call may take longer than Discord's initial
    /// acknowledgment window; the reply then edits the deferred response.
    pub async fn for_modal(http: Arc<Http>, modal: ModalInteraction) -> Self {
        let deferred = match modal.defer_ephemeral(&http).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Failed to defer modal interaction");
                false
            }
        };

        Self {
            http,
            guild_id: modal.guild_id,
            modal: Some(modal),
            deferred,
        }
    }
}

#[async_trait]
impl ChatSurface for DiscordSurface {
    async fn find_text_channel(&self, name: &str) -> Option<ChannelRef> {
        let guild_id = self.guild_id?;
        let channels = match guild_id.channels(&self.http).await {
            Ok(channels) => channels,
            Err(e) => {
                warn!(guild = %guild_id, error = %e, "Failed to list guild channels");
                return None;
            }
        };

        channels
            .into_values()
            .filter(|c| c.kind == ChannelType::Text && c.name == name)
            .min_by_key(|c| c.position)
            .map(|c| ChannelRef {
                id: c.id.get(),
                name: c.name,
            })
    }

    async fn post_message(&self, channel: &ChannelRef, content: &str) -> Result<(), SurfaceError> {
        ChannelId::new(channel.id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await
            .map(|_| ())
            .map_err(|e| SurfaceError(e.to_string()))
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), SurfaceError> {
        let Some(modal) = &self.modal else {
            return Err(SurfaceError("no interaction to reply to".to_string()));
        };

        let sent = if self.deferred {
            modal
                .edit_response(&self.http, EditInteractionResponse::new().content(content))
                .await
                .map(|_| ())
        } else {
            let message = CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(true);
            modal
                .create_response(&self.http, CreateInteractionResponse::Message(message))
                .await
        };

        sent.map_err(|e| SurfaceError(e.to_string()))
    }
}

//! Platform-independent interaction handlers.
//!
//! The chat platform is reached only through [`ChatSurface`], so the full
//! submit → announce → acknowledge sequence can be exercised without a
//! live connection. Each call handles one interaction and keeps no state.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::form::RawFormFields;
use crate::messages;
use crate::submitter::{FormSubmitter, SubmissionResult};

/// Failure reported by the chat platform.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Chat platform error: {0}")]
pub struct SurfaceError(pub String);

/// A text channel found by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRef {
    pub id: u64,
    pub name: String,
}

/// What the handlers need from the chat platform for one interaction.
#[async_trait]
pub trait ChatSurface: Send + Sync {
    /// Look up a text channel by name in the current server.
    async fn find_text_channel(&self, name: &str) -> Option<ChannelRef>;

    /// Post a public message in a channel.
    async fn post_message(&self, channel: &ChannelRef, content: &str) -> Result<(), SurfaceError>;

    /// Reply to the initiating user only.
    async fn reply_ephemeral(&self, content: &str) -> Result<(), SurfaceError>;
}

/// Handle a submitted review form.
///
/// Order is fixed: validate, call the review API, announce in
/// `review_channel` on success, then acknowledge the user. A missing channel
/// or a failed announcement never prevents the acknowledgment.
pub async fn handle_review_submission(
    submitter: &FormSubmitter,
    surface: &dyn ChatSurface,
    raw: &RawFormFields,
    author_mention: &str,
    review_channel: &str,
) -> SubmissionResult {
    let result = submitter.submit(raw).await;

    if let SubmissionResult::Submitted(submission) = &result {
        match surface.find_text_channel(review_channel).await {
            Some(channel) => {
                let text = messages::review_announcement(author_mention, submission);
                match surface.post_message(&channel, &text).await {
                    Ok(()) => debug!(channel = %channel.name, "Review announced"),
                    Err(e) => {
                        warn!(channel = %channel.name, error = %e, "Failed to announce review")
                    }
                }
            }
            None => debug!(channel = review_channel, "Review channel not found; skipping announcement"),
        }
    }

    if let Err(e) = surface.reply_ephemeral(&result.user_message()).await {
        warn!(error = %e, "Failed to acknowledge review submission");
    }

    result
}

/// Greet a new member in `welcome_channel`, if the server has one.
///
/// Returns whether a welcome message was posted.
pub async fn handle_member_join(
    surface: &dyn ChatSurface,
    member_mention: &str,
    welcome_channel: &str,
    review_channel: &str,
) -> bool {
    let Some(channel) = surface.find_text_channel(welcome_channel).await else {
        debug!(channel = welcome_channel, "Welcome channel not found");
        return false;
    };

    let text = messages::welcome_message(member_mention, review_channel);
    match surface.post_message(&channel, &text).await {
        Ok(()) => {
            info!(channel = %channel.name, "Welcomed new member");
            true
        }
        Err(e) => {
            warn!(channel = %channel.name, error = %e, "Failed to post welcome message");
            false
        }
    }
}

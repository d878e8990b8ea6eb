//! Discord interface for PickCourse course reviews.
//!
//! Members type `/avis` to open a review form. Valid reviews are forwarded
//! to the review API and announced in the `avis` channel; new members are
//! greeted in `bienvenue`.
//!
//! # Environment Variables
//!
//! Required:
//! - `DISCORD_TOKEN` (or `TOKEN`): Bot token from the Discord developer portal
//!
//! Optional:
//! - `PICKCOURSE_API_URL`: Review API base URL (default: http://localhost:7070)
//! - `PICKCOURSE_API_TIMEOUT_SECS`: Review API timeout (default: 5)
//! - `PICKCOURSE_REVIEW_CHANNEL` / `PICKCOURSE_WELCOME_CHANNEL`: Channel names
//! - `PICKCOURSE_PROFANITY_FILE`: Extra words for the comment filter
//!
//! # Example
//!
//! ```no_run
//! use pickcourse_core::BotConfig;
//! use pickcourse_discord::DiscordBot;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BotConfig::from_env()?;
//!     DiscordBot::new(config)?.start().await?;
//!     Ok(())
//! }
//! ```

pub mod bot;
pub mod error;
pub mod handler;
pub mod modal;
pub mod surface;

pub use bot::DiscordBot;
pub use error::{DiscordError, Result};
pub use handler::ReviewHandler;
pub use surface::DiscordSurface;

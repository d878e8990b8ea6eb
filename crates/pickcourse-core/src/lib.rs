//! PickCourse core - review form pipeline shared by every chat front end.
//!
//! This crate holds everything that does not depend on a chat platform:
//!
//! - **config**: Startup configuration (API URL, timeout, channel names)
//! - **form**: Field validation and normalization
//! - **profanity**: Word-list comment filter
//! - **api**: Review API client
//! - **submitter**: Validate-then-send pipeline and user-facing outcomes
//! - **messages**: Announcement and welcome texts
//! - **interaction**: Submit and member-join handlers over a `ChatSurface`

pub mod api;
pub mod config;
pub mod form;
pub mod interaction;
pub mod messages;
pub mod profanity;
pub mod submitter;

pub use api::{ApiError, HttpReviewApi, ReviewApi};
pub use config::{config_dir, env_file, BotConfig, ConfigError};
pub use form::{validate, FormError, RatingField, RawFormFields, ReviewSubmission};
pub use interaction::{
    handle_member_join, handle_review_submission, ChannelRef, ChatSurface, SurfaceError,
};
pub use profanity::{ProfanityError, ProfanityFilter};
pub use submitter::{FormSubmitter, SubmissionResult, SubmitterError};

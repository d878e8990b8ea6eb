//! Review submission pipeline.
//!
//! [`FormSubmitter::submit`] validates a raw form, sends the normalized
//! review exactly once, and folds every outcome into a [`SubmissionResult`]
//! that carries its own user-facing message.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::{ApiError, HttpReviewApi, ReviewApi};
use crate::config::BotConfig;
use crate::form::{self, FormError, RatingField, RawFormFields, ReviewSubmission};
use crate::profanity::{ProfanityError, ProfanityFilter};

/// Outcome of one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The review API accepted the review.
    Submitted(ReviewSubmission),
    /// The course code is malformed.
    InvalidFormat,
    /// A rating is non-numeric or out of range.
    InvalidRange(RatingField),
    /// The comment failed the profanity filter.
    ProhibitedContent,
    /// The review API answered with a non-200 status; carries the body.
    RemoteRejected(String),
    /// The review API could not be reached.
    RemoteUnreachable,
}

impl SubmissionResult {
    /// Whether the review was stored.
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Submitted(_))
    }

    /// Ephemeral reply shown to the user who submitted the form.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionResult::Submitted(_) => {
                "Votre avis a été ajouté avec succès ! ✅".to_string()
            }
            SubmissionResult::InvalidFormat => format!(
                "Erreur : le sigle du cours doit être au format 3 lettres suivies de 4 chiffres (ex: {}).",
                form::COURSE_CODE_EXAMPLE
            ),
            SubmissionResult::InvalidRange(field) => format!(
                "Erreur : la note de {} doit être un nombre entre 0 et 5.",
                field.label()
            ),
            SubmissionResult::ProhibitedContent => {
                "Erreur : commentaire contient des propos inappropriés.".to_string()
            }
            SubmissionResult::RemoteRejected(body) => format!("Erreur côté serveur : {}", body),
            SubmissionResult::RemoteUnreachable => {
                "Erreur : impossible de contacter le serveur.".to_string()
            }
        }
    }
}

impl From<FormError> for SubmissionResult {
    fn from(e: FormError) -> Self {
        match e {
            FormError::InvalidFormat => SubmissionResult::InvalidFormat,
            FormError::InvalidRange(field) => SubmissionResult::InvalidRange(field),
            FormError::ProhibitedContent => SubmissionResult::ProhibitedContent,
        }
    }
}

impl From<ApiError> for SubmissionResult {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Rejected { body, .. } => SubmissionResult::RemoteRejected(body),
            ApiError::Unreachable(_) | ApiError::ClientBuild(_) => {
                SubmissionResult::RemoteUnreachable
            }
        }
    }
}

/// Errors raised while assembling a submitter from configuration.
#[derive(Debug, thiserror::Error)]
pub enum SubmitterError {
    #[error(transparent)]
    Profanity(#[from] ProfanityError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Validates forms and forwards accepted reviews to the review API.
#[derive(Clone)]
pub struct FormSubmitter {
    api: Arc<dyn ReviewApi>,
    filter: ProfanityFilter,
}

impl FormSubmitter {
    /// Create a submitter over any review API.
    pub fn new(api: Arc<dyn ReviewApi>, filter: ProfanityFilter) -> Self {
        Self { api, filter }
    }

    /// Create the production submitter described by `config`.
    ///
    /// Uses the HTTP client and the built-in word list, merged with
    /// `config.profanity_file` when set.
    pub fn from_config(config: &BotConfig) -> Result<Self, SubmitterError> {
        let filter = match &config.profanity_file {
            Some(path) => ProfanityFilter::load(path)?,
            None => ProfanityFilter::default(),
        };
        let api = HttpReviewApi::new(config)?;
        info!(endpoint = %api.endpoint(), words = filter.len(), "Review submitter ready");
        Ok(Self::new(Arc::new(api), filter))
    }

    /// The profanity filter applied to comments.
    pub fn filter(&self) -> &ProfanityFilter {
        &self.filter
    }

    /// Validate `raw` and, if valid, send it to the review API once.
    pub async fn submit(&self, raw: &RawFormFields) -> SubmissionResult {
        let submission = match form::validate(raw, &self.filter) {
            Ok(submission) => submission,
            Err(e) => {
                info!(reason = %e, "Review form rejected");
                return e.into();
            }
        };

        match self.api.submit_review(&submission).await {
            Ok(()) => {
                info!(
                    course = %submission.course_code,
                    difficulty = submission.difficulty_rating,
                    workload = submission.workload_rating,
                    "Review submitted"
                );
                SubmissionResult::Submitted(submission)
            }
            Err(e) => {
                warn!(course = %submission.course_code, error = %e, "Review submission failed");
                e.into()
            }
        }
    }
}

impl std::fmt::Debug for FormSubmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSubmitter")
            .field("filter_words", &self.filter.len())
            .finish_non_exhaustive()
    }
}

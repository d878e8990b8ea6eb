//! Review form validation and normalization.
//!
//! Checks run in a fixed order and stop at the first failure:
//! course code format, difficulty rating, workload rating, then the
//! comment profanity check. Only a fully valid form yields a
//! [`ReviewSubmission`].

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profanity::ProfanityFilter;

/// Required course code shape, applied after uppercasing.
pub const COURSE_CODE_PATTERN: &str = r"^[A-Z]{3}[0-9]{4}$";

/// Example shown to users when the course code is rejected.
pub const COURSE_CODE_EXAMPLE: &str = "IFT2255";

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted rating.
pub const MAX_RATING: f64 = 5.0;

fn course_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COURSE_CODE_PATTERN).unwrap())
}

/// The five raw values entered in the review form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFormFields {
    pub course_code: String,
    pub professor: String,
    pub difficulty: String,
    pub workload: String,
    pub comment: String,
}

impl RawFormFields {
    /// Convenience constructor in form order.
    pub fn new(
        course_code: impl Into<String>,
        professor: impl Into<String>,
        difficulty: impl Into<String>,
        workload: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            professor: professor.into(),
            difficulty: difficulty.into(),
            workload: workload.into(),
            comment: comment.into(),
        }
    }
}

/// The two numeric fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingField {
    Difficulty,
    Workload,
}

impl RatingField {
    /// Name of the field as shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            RatingField::Difficulty => "difficulté",
            RatingField::Workload => "charge de travail",
        }
    }
}

impl fmt::Display for RatingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingField::Difficulty => write!(f, "difficulty"),
            RatingField::Workload => write!(f, "workload"),
        }
    }
}

/// Reasons a form is rejected before anything is sent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// Course code does not match [`COURSE_CODE_PATTERN`].
    #[error("course code must be 3 letters followed by 4 digits (e.g. IFT2255)")]
    InvalidFormat,

    /// A rating is not a number in `[0, 5]`.
    #[error("{0} rating must be a number between 0 and 5")]
    InvalidRange(RatingField),

    /// The comment contains a flagged word.
    #[error("comment contains prohibited content")]
    ProhibitedContent,
}

/// A validated, normalized review ready to be sent to the review API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSubmission {
    /// Uppercased course code.
    #[serde(rename = "sigleCours")]
    pub course_code: String,
    #[serde(rename = "professeur")]
    pub professor_name: String,
    #[serde(rename = "noteDifficulte")]
    pub difficulty_rating: u8,
    #[serde(rename = "noteCharge")]
    pub workload_rating: u8,
    #[serde(rename = "commentaire")]
    pub comment: String,
}

/// Validate raw form input and normalize it.
///
/// Checks run in order: course code, difficulty, workload, comment. The
/// course code and ratings are trimmed first, so `"IFT2255 "` is accepted
/// as `IFT2255`.
pub fn validate(
    raw: &RawFormFields,
    filter: &ProfanityFilter,
) -> Result<ReviewSubmission, FormError> {
    let course_code = normalize_course_code(&raw.course_code)?;
    let difficulty_rating = parse_rating(&raw.difficulty, RatingField::Difficulty)?;
    let workload_rating = parse_rating(&raw.workload, RatingField::Workload)?;

    if filter.contains_profanity(&raw.comment) {
        return Err(FormError::ProhibitedContent);
    }

    Ok(ReviewSubmission {
        course_code,
        professor_name: raw.professor.clone(),
        difficulty_rating,
        workload_rating,
        comment: raw.comment.clone(),
    })
}

/// Uppercase a course code and check its shape.
pub fn normalize_course_code(value: &str) -> Result<String, FormError> {
    let code = value.trim().to_uppercase();
    if course_code_regex().is_match(&code) {
        Ok(code)
    } else {
        Err(FormError::InvalidFormat)
    }
}

/// Parse a rating as a real number in `[0, 5]` and round it half up.
pub fn parse_rating(value: &str, field: RatingField) -> Result<u8, FormError> {
    let rating: f64 = value
        .trim()
        .parse()
        .map_err(|_| FormError::InvalidRange(field))?;

    if !rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(FormError::InvalidRange(field));
    }

    // Non-negative, so `round` is half-up here.
    Ok(rating.round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(code: &str, difficulty: &str, workload: &str, comment: &str) -> RawFormFields {
        RawFormFields::new(code, "Jane Doe", difficulty, workload, comment)
    }

    #[test]
    fn test_valid_form_is_normalized() {
        let filter = ProfanityFilter::default();
        let submission = validate(&form("ift2255", "3.0", "4", "great course"), &filter).unwrap();

        assert_eq!(submission.course_code, "IFT2255");
        assert_eq!(submission.professor_name, "Jane Doe");
        assert_eq!(submission.difficulty_rating, 3);
        assert_eq!(submission.workload_rating, 4);
        assert_eq!(submission.comment, "great course");
    }

    #[test]
    fn test_course_code_format() {
        for code in ["IFT225", "IFT22555", "IF2255", "IFTX255", "2255IFT", "", "IFT 2255", "ÉTU1234"] {
            assert_eq!(
                normalize_course_code(code),
                Err(FormError::InvalidFormat),
                "{code:?} should be rejected"
            );
        }
        assert_eq!(normalize_course_code("mat1400").unwrap(), "MAT1400");
        assert_eq!(normalize_course_code(" Ift1015 ").unwrap(), "IFT1015");
        assert_eq!(normalize_course_code("IFT2255 ").unwrap(), "IFT2255");
    }

    #[test]
    fn test_rating_bounds() {
        assert_eq!(parse_rating("0", RatingField::Difficulty), Ok(0));
        assert_eq!(parse_rating("5", RatingField::Difficulty), Ok(5));
        assert_eq!(parse_rating("5.0", RatingField::Workload), Ok(5));

        for value in ["-0.1", "5.01", "6", "-1", "abc", "", "3,5", "NaN", "inf"] {
            assert_eq!(
                parse_rating(value, RatingField::Workload),
                Err(FormError::InvalidRange(RatingField::Workload)),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rating_rounds_half_up() {
        assert_eq!(parse_rating("4.9", RatingField::Difficulty), Ok(5));
        assert_eq!(parse_rating("4.5", RatingField::Difficulty), Ok(5));
        assert_eq!(parse_rating("4.49", RatingField::Difficulty), Ok(4));
        assert_eq!(parse_rating("0.4", RatingField::Difficulty), Ok(0));
        assert_eq!(parse_rating(" 2 ", RatingField::Difficulty), Ok(2));
    }

    #[test]
    fn test_validation_order() {
        let filter = ProfanityFilter::default();

        // Bad code wins over everything else.
        assert_eq!(
            validate(&form("nope", "9", "9", "shit"), &filter),
            Err(FormError::InvalidFormat)
        );
        // Difficulty is checked before workload.
        assert_eq!(
            validate(&form("IFT2255", "9", "x", "shit"), &filter),
            Err(FormError::InvalidRange(RatingField::Difficulty))
        );
        assert_eq!(
            validate(&form("IFT2255", "2", "x", "shit"), &filter),
            Err(FormError::InvalidRange(RatingField::Workload))
        );
        assert_eq!(
            validate(&form("IFT2255", "2", "3", "shit"), &filter),
            Err(FormError::ProhibitedContent)
        );
    }

    #[test]
    fn test_only_comment_is_filtered() {
        let filter = ProfanityFilter::default();
        let raw = RawFormFields::new("IFT2255", "Prof Merde", "1", "1", "");
        let submission = validate(&raw, &filter).unwrap();
        assert_eq!(submission.professor_name, "Prof Merde");
        assert_eq!(submission.comment, "");
    }

    #[test]
    fn test_wire_format() {
        let submission = ReviewSubmission {
            course_code: "IFT2255".to_string(),
            professor_name: "Jane Doe".to_string(),
            difficulty_rating: 3,
            workload_rating: 4,
            comment: "great course".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            serde_json::json!({
                "sigleCours": "IFT2255",
                "professeur": "Jane Doe",
                "noteDifficulte": 3,
                "noteCharge": 4,
                "commentaire": "great course"
            })
        );
    }
}

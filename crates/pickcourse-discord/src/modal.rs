//! The `/avis` slash command and its review modal.

use pickcourse_core::RawFormFields;
use serenity::builder::{CreateActionRow, CreateCommand, CreateInputText, CreateModal};
use serenity::model::application::{ActionRowComponent, InputTextStyle, ModalInteraction};

/// Slash command opening the review form.
pub const COMMAND_NAME: &str = "avis";

/// Custom id of the review modal.
pub const MODAL_ID: &str = "review_form";

pub const COURSE_CODE_ID: &str = "course_code";
pub const PROFESSOR_ID: &str = "professor";
pub const DIFFICULTY_ID: &str = "difficulty";
pub const WORKLOAD_ID: &str = "workload";
pub const COMMENT_ID: &str = "comment";

/// Definition of the `/avis` command.
pub fn review_command() -> CreateCommand {
    CreateCommand::new(COMMAND_NAME)
        .description("Cliquez sur la touche Entrée pour remplir le formulaire.")
}

/// The five-field review form.
pub fn review_modal() -> CreateModal {
    let inputs = [
        CreateInputText::new(InputTextStyle::Short, "Sigle du cours", COURSE_CODE_ID)
            .placeholder("Ex : IFT2255")
            .required(true),
        CreateInputText::new(InputTextStyle::Short, "Nom du professeur", PROFESSOR_ID)
            .placeholder("Entrez le nom du prof")
            .required(false),
        CreateInputText::new(InputTextStyle::Short, "Note difficulté", DIFFICULTY_ID)
            .placeholder("Nombre entre 0 et 5")
            .required(true),
        CreateInputText::new(InputTextStyle::Short, "Charge de travail", WORKLOAD_ID)
            .placeholder("Nombre entre 0 et 5")
            .required(true),
        CreateInputText::new(InputTextStyle::Paragraph, "Commentaire", COMMENT_ID)
            .placeholder("Entrez votre commentaire ici")
            .required(false),
    ];

    CreateModal::new(MODAL_ID, "Formulaire Avis")
        .components(inputs.into_iter().map(CreateActionRow::InputText).collect())
}

/// Collect raw form values from a submitted review modal.
pub fn raw_fields(modal: &ModalInteraction) -> RawFormFields {
    let inputs = modal
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .filter_map(|component| match component {
            ActionRowComponent::InputText(input) => {
                Some((input.custom_id.as_str(), input.value.as_deref()))
            }
            _ => None,
        });
    raw_fields_from_inputs(inputs)
}

/// Map `(custom_id, value)` pairs onto form fields.
///
/// Missing values become empty strings; unknown ids are ignored.
pub fn raw_fields_from_inputs<'a, I>(inputs: I) -> RawFormFields
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut raw = RawFormFields::default();
    for (id, value) in inputs {
        let value = value.unwrap_or_default().to_string();
        match id {
            COURSE_CODE_ID => raw.course_code = value,
            PROFESSOR_ID => raw.professor = value,
            DIFFICULTY_ID => raw.difficulty = value,
            WORKLOAD_ID => raw.workload = value,
            COMMENT_ID => raw.comment = value,
            _ => {}
        }
    }
    raw
}

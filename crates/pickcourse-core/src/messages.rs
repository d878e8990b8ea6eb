//! Public message texts posted by the bot.

use crate::form::ReviewSubmission;

/// Placeholder for optional fields left empty.
const EMPTY_FIELD: &str = "—";

/// Announcement posted in the review channel after a successful submission.
pub fn review_announcement(author_mention: &str, submission: &ReviewSubmission) -> String {
    format!(
        "Nouvel avis ajouté par {} :\n\
        **Cours** : {}\n\
        **Professeur** : {}\n\
        **Difficulté** : {}\n\
        **Charge de travail** : {}\n\
        **Commentaire** : {}",
        author_mention,
        submission.course_code,
        or_placeholder(&submission.professor_name),
        submission.difficulty_rating,
        submission.workload_rating,
        or_placeholder(&submission.comment),
    )
}

/// Onboarding message posted in the welcome channel when a member joins.
pub fn welcome_message(member_mention: &str, review_channel: &str) -> String {
    format!(
        "Hello {}, je suis Danielle 😎!\n\
        Bienvenue dans le serveur *Avis PickCourse*! \n\
        Ici, vous pouvez partager vos avis sur les cours de l'UdeM. \
        Pour poster un avis, allez dans le salon {}, tapez `/avis`, puis cliquez sur la touche Entrée \
        de votre clavier ( ou Send sur mobile), et remplissez le formulaire.\n\n\
        **Règles à respecter :**\n\
        - Pas d'insultes ou de mots déplacés\n\
        - Le sigle du cours doit correspondre à un cours réel de l'UdeM\n\
        - Les notes doivent être comprises entre 0 et 5\n\n\
        Sinon, je serai très mécontente, haha 😄!",
        member_mention, review_channel
    )
}

fn or_placeholder(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        EMPTY_FIELD
    } else {
        trimmed
    }
}

#[cfg(test)]
#[path = "scenario_composer_test.rs"]
mod tests;

use crate::domain::models::ScenarioDraft;
use crate::domain::models::SessionRequest;

/// Natural language summary of the scenario. Backend text extraction parses
/// this exact wording, so punctuation and spacing must stay as they are.
pub fn composed_text(draft: &ScenarioDraft) -> String {
    let mut text = format!(
        "I have an interview at {} for a {}",
        draft.company, draft.role
    );
    if !draft.level.is_empty() {
        text += &format!(" position at level {}", draft.level);
    }
    text += ".";
    if !draft.brief.is_empty() {
        text += &format!(" Additional context: {}", draft.brief);
    }

    return text;
}

/// Builds the session creation payload. Assumes the draft already passed the
/// launch precondition and does not check it again. Values go out as typed.
pub fn compose(draft: &ScenarioDraft) -> SessionRequest {
    return SessionRequest {
        composed_text: composed_text(draft),
        session_id: None,
        company: draft.company.to_string(),
        role: draft.role.to_string(),
        level: if draft.level.is_empty() {
            None
        } else {
            Some(draft.level.to_string())
        },
        email: None,
    };
}

/// Short one-line preview of the scenario once company and role are picked.
pub fn preview(draft: &ScenarioDraft) -> Option<String> {
    let company = draft.company.trim();
    let role = draft.role.trim();
    if company.is_empty() || role.is_empty() {
        return None;
    }

    let level = draft.level.trim();
    if level.is_empty() {
        return Some(format!("Prep for {company} {role}"));
    }

    return Some(format!("Prep for {company} {level} {role}"));
}

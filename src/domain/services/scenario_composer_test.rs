use super::compose;
use super::composed_text;
use super::preview;
use crate::domain::models::ScenarioDraft;

#[test]
fn it_composes_without_level_or_brief() {
    let draft = ScenarioDraft::new("Adobe", "Data Scientist", "", "");
    insta::assert_snapshot!(composed_text(&draft), @"I have an interview at Adobe for a Data Scientist.");
}

#[test]
fn it_composes_with_level_and_brief() {
    let draft = ScenarioDraft::new("Meta", "ML Engineer", "L4", "Focus on system design");
    insta::assert_snapshot!(composed_text(&draft), @"I have an interview at Meta for a ML Engineer position at level L4. Additional context: Focus on system design");
}

#[test]
fn it_composes_with_level_only() {
    let draft = ScenarioDraft::new("Google", "Data Analyst", "L2", "");
    insta::assert_snapshot!(composed_text(&draft), @"I have an interview at Google for a Data Analyst position at level L2.");
}

#[test]
fn it_composes_with_brief_only() {
    let draft = ScenarioDraft::new("OpenAI", "ML Engineer", "", "Mostly LLM evals");
    insta::assert_snapshot!(composed_text(&draft), @"I have an interview at OpenAI for a ML Engineer. Additional context: Mostly LLM evals");
}

#[test]
fn it_mentions_level_only_when_present() {
    let companies = ["Adobe", "Meta", "Amazon"];
    let roles = ["Data Scientist", "ML Engineer"];
    let briefs = ["", "Heavy on SQL"];

    for company in companies {
        for role in roles {
            for brief in briefs {
                let without = ScenarioDraft::new(company, role, "", brief);
                assert!(!composed_text(&without).contains("position at level"));

                let with = ScenarioDraft::new(company, role, "L3", brief);
                assert!(composed_text(&with).contains("position at level L3"));
            }
        }
    }
}

#[test]
fn it_ends_with_brief_only_when_present() {
    for level in ["", "L1", "Senior"] {
        let with = ScenarioDraft::new("Amazon", "Data Analyst", level, "Behavioral round");
        assert!(composed_text(&with).ends_with("Additional context: Behavioral round"));

        let without = ScenarioDraft::new("Amazon", "Data Analyst", level, "");
        assert!(!composed_text(&without).contains("Additional context"));
        assert!(composed_text(&without).ends_with('.'));
    }
}

#[test]
fn it_interpolates_values_as_typed() {
    let draft = ScenarioDraft::new("Meta", "ML Engineer", " ", "Focus on system design ");
    let text = composed_text(&draft);

    assert!(text.contains("position at level  ."));
    assert!(text.ends_with("Additional context: Focus on system design "));
    assert_eq!(compose(&draft).level, Some(" ".to_string()));
}

#[test]
fn it_fills_structured_fields() {
    let request = compose(&ScenarioDraft::new("Meta", "ML Engineer", "", "Focus on system design").agree());

    assert_eq!(request.session_id, None);
    assert_eq!(request.company, "Meta");
    assert_eq!(request.role, "ML Engineer");
    assert_eq!(request.level, None);
    assert_eq!(request.email, None);
    assert!(!request.composed_text.is_empty());
}

#[test]
fn it_serializes_wire_names() -> anyhow::Result<()> {
    let mut request = compose(&ScenarioDraft::new("Adobe", "Data Scientist", "L1", ""));
    request.email = Some("candidate@example.com".to_string());

    insta::assert_snapshot!(serde_json::to_string(&request)?, @r###"{"user_text":"I have an interview at Adobe for a Data Scientist position at level L1.","session_id":null,"company":"Adobe","role":"Data Scientist","level":"L1","email":"candidate@example.com"}"###);
    return Ok(());
}

#[test]
fn it_previews_once_company_and_role_are_set() {
    assert_eq!(preview(&ScenarioDraft::new("Meta", "", "L4", "")), None);
    assert_eq!(
        preview(&ScenarioDraft::new("Meta", "ML Engineer", "L4", "")),
        Some("Prep for Meta L4 ML Engineer".to_string())
    );
    assert_eq!(
        preview(&ScenarioDraft::new("Meta", "ML Engineer", "", "")),
        Some("Prep for Meta ML Engineer".to_string())
    );
}

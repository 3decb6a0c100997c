use std::sync::Arc;

use anyhow::Result;
use serde_json::json;
use test_utils::session_list_fixture;
use test_utils::session_summary_fixture;

use super::format_session;
use super::format_summary;
use super::App;
use crate::domain::models::KeyValueStore;
use crate::domain::models::RequestOutcome;
use crate::domain::models::Route;
use crate::domain::models::ScenarioDraft;
use crate::domain::models::SessionOverview;
use crate::domain::models::SessionSummary;
use crate::infrastructure::gateway::ScriptedGateway;
use crate::infrastructure::storage::MemoryStore;

fn signed_in_store() -> Result<MemoryStore> {
    let storage = MemoryStore::default();
    storage.set("email", "candidate@example.com")?;
    return Ok(storage);
}

#[test]
fn it_formats_sessions() -> Result<()> {
    let sessions: Vec<SessionOverview> = serde_json::from_str(&session_list_fixture())?;

    let first = format_session(&sessions[0]);
    assert!(first.starts_with("- (ID: a1b2c3d4-0000-4000-8000-000000000002)"));
    assert!(first.contains("Meta L4 ML Engineer"));
    assert!(first.ends_with("Score: 7.5"));

    let second = format_session(&sessions[1]);
    assert!(second.contains("Adobe Data Scientist"));
    assert!(!second.contains("Score"));
    return Ok(());
}

#[test]
fn it_formats_summaries() -> Result<()> {
    let summary: SessionSummary = serde_json::from_str(&session_summary_fixture())?;
    let res = format_summary(&summary);

    assert!(res.contains("Answer: L1 produces sparse weights, L2 shrinks them smoothly."));
    assert!(res.contains("Score: 9/10"));
    return Ok(());
}

#[test]
fn it_reports_the_signed_in_email_until_logout() -> Result<()> {
    let app = App::with(
        Box::new(signed_in_store()?),
        Arc::new(ScriptedGateway::default()),
    );
    assert_eq!(app.whoami(), Some("candidate@example.com".to_string()));

    app.logout()?;
    assert_eq!(app.whoami(), None);
    return Ok(());
}

#[tokio::test]
async fn it_refuses_to_start_without_login() {
    let gateway = Arc::new(ScriptedGateway::default());
    let app = App::with(Box::<MemoryStore>::default(), gateway.clone());

    let draft = ScenarioDraft::new("Adobe", "Data Scientist", "", "").agree();
    let res = app.start(&draft).await;

    assert!(res.is_err());
    assert!(gateway.requests().is_empty());
}

#[tokio::test]
async fn it_does_not_launch_without_consent() -> Result<()> {
    let gateway = Arc::new(ScriptedGateway::default());
    let app = App::with(Box::new(signed_in_store()?), gateway.clone());

    let draft = ScenarioDraft::new("Adobe", "Data Scientist", "", "");
    assert!(!app.launch(&draft).await?);
    assert!(gateway.requests().is_empty());
    return Ok(());
}

#[tokio::test]
async fn it_launches_into_the_interview() -> Result<()> {
    let gateway = Arc::new(ScriptedGateway::new(vec![RequestOutcome::Success(json!({
        "session_id": "a1b2c3d4-0000-4000-8000-000000000001",
        "question": "Tell me about an A/B test you ran."
    }))]));
    let app = App::with(Box::new(signed_in_store()?), gateway.clone());

    let draft = ScenarioDraft::new("Adobe", "Data Scientist", "L1", "").agree();
    assert!(app.launch(&draft).await?);
    assert_eq!(app.ctx.navigator.current(), Route::Interview);

    let requests = gateway.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/session");
    assert_eq!(
        requests[0]
            .body
            .as_ref()
            .and_then(|e| return e.get("email"))
            .and_then(|e| return e.as_str()),
        Some("candidate@example.com")
    );
    return Ok(());
}

#[tokio::test]
async fn it_surfaces_list_errors_without_failing() -> Result<()> {
    let gateway = Arc::new(ScriptedGateway::new(vec![RequestOutcome::server_error(
        "Database unavailable",
    )]));
    let app = App::with(Box::new(signed_in_store()?), gateway.clone());

    app.print_sessions(false).await?;
    assert_eq!(gateway.requests()[0].path, "/session/list");
    return Ok(());
}

#[tokio::test]
async fn it_lists_sessions_for_the_signed_in_account() -> Result<()> {
    let sessions: serde_json::Value = serde_json::from_str(&session_list_fixture())?;
    let gateway = Arc::new(ScriptedGateway::new(vec![
        RequestOutcome::Success(sessions),
        RequestOutcome::Success(json!([])),
    ]));
    let app = App::with(Box::new(signed_in_store()?), gateway.clone());

    app.print_sessions(false).await?;
    app.print_sessions(true).await?;

    let requests = gateway.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|e| return e.path == "/session/list"));
    return Ok(());
}

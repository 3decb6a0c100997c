use anyhow::Result;

use super::SessionContext;
use crate::domain::models::Identity;
use crate::domain::models::KeyValueStore;
use crate::domain::models::Route;
use crate::domain::models::SessionHandle;
use crate::infrastructure::storage::MemoryStore;

fn context() -> SessionContext {
    return SessionContext::new(Box::<MemoryStore>::default());
}

#[test]
fn it_resumes_on_login_without_identity() {
    let ctx = context();
    assert_eq!(ctx.resume(), Route::Login);
}

#[test]
fn it_resumes_on_select_role_with_remembered_email() -> Result<()> {
    let storage = MemoryStore::default();
    storage.set("email", "candidate@example.com")?;
    let ctx = SessionContext::new(Box::new(storage));

    assert_eq!(ctx.resume(), Route::SelectRole);
    return Ok(());
}

#[test]
fn it_guards_protected_routes() {
    let ctx = context();
    ctx.navigator.navigate(Route::SelectRole);

    assert_eq!(ctx.guard(), Route::Login);
}

#[test]
fn it_lets_public_routes_through() {
    let ctx = context();
    ctx.navigator.navigate(Route::ForgotPassword);

    assert_eq!(ctx.guard(), Route::ForgotPassword);
}

#[test]
fn it_logs_out_completely() -> Result<()> {
    let ctx = context();
    ctx.identity
        .set(Identity::new("candidate@example.com", Some("abc".to_string())))?;
    ctx.navigator.carry(SessionHandle {
        session_id: "sid-1".to_string(),
        current_question: "Why us?".to_string(),
    });

    ctx.logout()?;

    assert_eq!(ctx.identity.get(), None);
    assert_eq!(ctx.navigator.current(), Route::Login);
    assert_eq!(ctx.navigator.take_session(), None);
    return Ok(());
}

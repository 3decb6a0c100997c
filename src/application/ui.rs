#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::sync::Arc;
use std::sync::Mutex;

use anyhow::bail;
use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use dialoguer::Input;
use dialoguer::Password;
use dialoguer::Select;
use yansi::Paint;

use crate::domain::models::AuthFlowKind;
use crate::domain::models::AuthForm;
use crate::domain::models::FlowStatus;
use crate::domain::models::Gateway;
use crate::domain::models::KeyValueStoreBox;
use crate::domain::models::RequestOutcome;
use crate::domain::models::Route;
use crate::domain::models::ScenarioDraft;
use crate::domain::models::SessionOverview;
use crate::domain::models::SessionSummary;
use crate::domain::models::SharedGateway;
use crate::domain::services::can_start;
use crate::domain::services::preview;
use crate::domain::services::validate_form;
use crate::domain::services::AuthFlow;
use crate::domain::services::InterviewSession;
use crate::domain::services::SessionContext;
use crate::domain::services::SessionHistory;
use crate::domain::services::SessionLaunch;
use crate::infrastructure::gateway::HttpGateway;
use crate::infrastructure::storage::FileStore;
use crate::infrastructure::storage::MemoryStore;

const COMPANIES: [&str; 5] = ["Google", "Meta", "Amazon", "OpenAI", "Adobe"];
const ROLES: [&str; 3] = ["Data Analyst", "Data Scientist", "ML Engineer"];
const LEVELS: [&str; 4] = ["L1", "L2", "L3", "L4"];
const TERMS: &str = "I understand answers are sent to an AI interviewer and stored with my session.";

enum Flow {
    Continue,
    Quit,
}

fn theme() -> ColorfulTheme {
    return ColorfulTheme::default();
}

fn pick_or_type(prompt: &str, options: &[&str], optional: bool) -> Result<String> {
    let mut items = options
        .iter()
        .map(|e| return e.to_string())
        .collect::<Vec<String>>();
    if optional {
        items.insert(0, "(skip)".to_string());
    }
    items.push("Other...".to_string());

    let idx = Select::with_theme(&theme())
        .with_prompt(prompt)
        .default(0)
        .items(&items)
        .interact()?;

    if optional && idx == 0 {
        return Ok("".to_string());
    }
    if idx == items.len() - 1 {
        let text: String = Input::with_theme(&theme())
            .with_prompt(prompt)
            .allow_empty(optional)
            .interact_text()?;
        return Ok(text);
    }

    return Ok(items[idx].to_string());
}

pub fn format_session(session: &SessionOverview) -> String {
    let mut res = format!(
        "- (ID: {}) {}",
        session.session_id,
        session.created_at.as_deref().unwrap_or("unknown date")
    );

    let scenario = [&session.company, &session.level, &session.role]
        .into_iter()
        .filter_map(|e| return e.as_deref())
        .filter(|e| return !e.is_empty())
        .collect::<Vec<&str>>()
        .join(" ");
    if !scenario.is_empty() {
        res = format!("{res}, {scenario}");
    }

    if let Some(score) = session.overall_score {
        res = format!("{res}, Score: {score:.1}");
    }

    return res;
}

pub fn format_summary(summary: &SessionSummary) -> String {
    let mut lines = vec![format_session(&summary.session)];
    for turn in &summary.turns {
        lines.push(format!("\n({}) {}", turn.index + 1, turn.question));
        lines.push(format!("    Answer: {}", turn.user_answer));
        if !turn.feedback.is_empty() {
            lines.push(format!("    Feedback: {}", turn.feedback));
        }
        if let Some(score) = turn.score {
            lines.push(format!("    Score: {score}/10"));
        }
    }

    return lines.join("\n");
}

/// Terminal front end over the controllers. Holds the shared context and the
/// scenario of the current form session.
pub struct App {
    ctx: SessionContext,
    gateway: SharedGateway,
    draft: Mutex<Option<ScenarioDraft>>,
}

impl App {
    pub fn new(ephemeral: bool) -> App {
        let storage: KeyValueStoreBox = if ephemeral {
            Box::<MemoryStore>::default()
        } else {
            Box::<FileStore>::default()
        };

        let gateway = HttpGateway::default();
        tracing::debug!(api_url = gateway.base_url(), ephemeral, "client ready");
        return App::with(storage, Arc::new(gateway));
    }

    pub fn with(storage: KeyValueStoreBox, gateway: SharedGateway) -> App {
        return App {
            ctx: SessionContext::new(storage),
            gateway,
            draft: Mutex::new(None),
        };
    }

    fn remember_draft(&self, draft: Option<ScenarioDraft>) {
        let mut current = self
            .draft
            .lock()
            .unwrap_or_else(|poisoned| return poisoned.into_inner());
        *current = draft;
    }

    fn last_draft(&self) -> Option<ScenarioDraft> {
        return self
            .draft
            .lock()
            .unwrap_or_else(|poisoned| return poisoned.into_inner())
            .clone();
    }

    /// Interactive screen flow, starting from wherever the stored identity
    /// allows.
    pub async fn run(&self) -> Result<()> {
        self.ctx.resume();

        loop {
            let flow = match self.ctx.guard() {
                Route::Login => self.entry_screen().await?,
                Route::Signup => self.auth_screen(AuthFlowKind::Signup, None).await?,
                Route::ForgotPassword => {
                    self.auth_screen(AuthFlowKind::ForgotPassword, None).await?
                }
                Route::SelectRole => self.select_role_screen().await?,
                Route::Interview => self.interview_screen().await?,
            };

            if let Flow::Quit = flow {
                return Ok(());
            }
        }
    }

    async fn entry_screen(&self) -> Result<Flow> {
        let items = ["Log in", "Sign up", "Forgot password", "Quit"];
        let idx = Select::with_theme(&theme())
            .with_prompt("Welcome to your mock interview")
            .default(0)
            .items(&items)
            .interact()?;

        match idx {
            0 => return self.auth_screen(AuthFlowKind::Login, None).await,
            1 => self.ctx.navigator.navigate(Route::Signup),
            2 => self.ctx.navigator.navigate(Route::ForgotPassword),
            _ => return Ok(Flow::Quit),
        }

        return Ok(Flow::Continue);
    }

    fn prompt_form(&self, kind: AuthFlowKind, email: Option<&str>) -> Result<AuthForm> {
        let email = match email {
            Some(email) => email.to_string(),
            None => Input::with_theme(&theme())
                .with_prompt("Email")
                .interact_text()?,
        };

        if kind == AuthFlowKind::ForgotPassword {
            return Ok(AuthForm::email_only(&email));
        }

        let password = Password::with_theme(&theme())
            .with_prompt("Password")
            .interact()?;
        let mut form = AuthForm::credentials(&email, &password);

        if kind == AuthFlowKind::Signup {
            form.confirm_password = Password::with_theme(&theme())
                .with_prompt("Confirm password")
                .interact()?;
        }

        return Ok(form);
    }

    /// One auth screen. Failed attempts can be retried until the user backs
    /// out.
    async fn auth_screen(&self, kind: AuthFlowKind, email: Option<&str>) -> Result<Flow> {
        let flow = AuthFlow::new(kind, self.gateway.clone());

        loop {
            let form = self.prompt_form(kind, email)?;
            if let Err(reason) = validate_form(kind, &form) {
                println!("{}", Paint::red(reason));
            } else if flow.submit(&self.ctx, &form).await.is_some() {
                match flow.status() {
                    FlowStatus::Succeeded { message } => {
                        println!("{}", Paint::green(message));
                        if kind == AuthFlowKind::ForgotPassword {
                            self.ctx.navigator.navigate(Route::Login);
                        }
                        return Ok(Flow::Continue);
                    }
                    FlowStatus::Failed { message } => println!("{}", Paint::red(message)),
                    FlowStatus::Idle | FlowStatus::Submitting => {}
                }
            }

            let retry = Confirm::with_theme(&theme())
                .with_prompt("Try again?")
                .default(true)
                .interact()?;
            flow.edit();
            if !retry {
                self.ctx.navigator.navigate(Route::Login);
                return Ok(Flow::Continue);
            }
        }
    }

    fn prompt_draft(&self) -> Result<ScenarioDraft> {
        let company = pick_or_type("Company", &COMPANIES, false)?;
        let role = pick_or_type("Role", &ROLES, false)?;
        let level = pick_or_type("Level", &LEVELS, true)?;
        let brief: String = Input::with_theme(&theme())
            .with_prompt("Anything the interviewer should know? (optional)")
            .allow_empty(true)
            .interact_text()?;

        let mut draft = ScenarioDraft::new(&company, &role, &level, &brief);
        if let Some(text) = preview(&draft) {
            println!("{}", Paint::cyan(format!("Preview: {text}")));
        }

        draft.agreed_to_terms = Confirm::with_theme(&theme())
            .with_prompt(TERMS)
            .default(false)
            .interact()?;

        return Ok(draft);
    }

    async fn select_role_screen(&self) -> Result<Flow> {
        let email = self
            .ctx
            .identity
            .get()
            .map(|e| return e.email)
            .unwrap_or_default();
        let items = ["Start an interview", "Past sessions", "Log out", "Quit"];
        let idx = Select::with_theme(&theme())
            .with_prompt(format!("Signed in as {email}"))
            .default(0)
            .items(&items)
            .interact()?;

        match idx {
            0 => {
                let draft = self.prompt_draft()?;
                self.launch(&draft).await?;
            }
            1 => self.print_sessions(false).await?,
            2 => self.logout()?,
            _ => return Ok(Flow::Quit),
        }

        return Ok(Flow::Continue);
    }

    /// Starts a session for `draft`. On success the navigator is already on
    /// the interview screen with the session carried.
    pub async fn launch(&self, draft: &ScenarioDraft) -> Result<bool> {
        if !can_start(draft) {
            println!(
                "{}",
                Paint::red("Pick a company and a role, and accept the terms to start.")
            );
            return Ok(false);
        }

        println!("Starting...");
        let launch = SessionLaunch::new(self.gateway.clone());
        let outcome = launch.start(&self.ctx, draft).await;
        if let Some(message) = launch.error() {
            println!("{}", Paint::red(message));
            return Ok(false);
        }

        self.remember_draft(Some(draft.clone()));
        return Ok(outcome.is_some());
    }

    pub async fn interview_screen(&self) -> Result<Flow> {
        let Some(session) = InterviewSession::enter(&self.ctx, self.gateway.clone()) else {
            println!("{}", Paint::yellow("No active session. Start one from the scenario screen."));
            self.ctx.navigator.navigate(Route::SelectRole);
            return Ok(Flow::Continue);
        };

        println!(
            "{}",
            Paint::new("Answer each question. Type /restart for a new first question, /end to stop.")
                .dimmed()
        );

        while !session.is_finished() {
            println!("\n{}", Paint::new(session.current_question()).bold());
            let answer: String = Input::with_theme(&theme())
                .with_prompt("Your answer")
                .interact_text()?;

            match answer.trim() {
                "/end" => break,
                "/restart" => {
                    if let Some(draft) = self.last_draft() {
                        let launch = SessionLaunch::new(self.gateway.clone());
                        let outcome = launch.restart(&self.ctx, &draft, session.session_id()).await;
                        if let Some(RequestOutcome::Error { message, .. }) = &outcome {
                            println!("{}", Paint::red(message));
                            continue;
                        }
                        return Ok(Flow::Continue);
                    }
                    println!("{}", Paint::yellow("Nothing to restart from."));
                }
                text => match session.answer(text).await {
                    Some(RequestOutcome::Success(turn)) => {
                        if !turn.feedback.is_empty() {
                            println!("{}", Paint::cyan(&turn.feedback));
                        }
                        if let Some(score) = turn.score {
                            println!("Score: {score}/10");
                        }
                    }
                    Some(RequestOutcome::Error { .. }) => {
                        if let Some(message) = session.error() {
                            println!("{}", Paint::red(message));
                        }
                    }
                    None => {}
                },
            }
        }

        if let Some(average) = session.average_score() {
            println!(
                "\n{}",
                Paint::green(format!(
                    "Answered {} questions, average score {average:.1}/10.",
                    session.turns().len()
                ))
            );
        }

        if let Some(RequestOutcome::Error { message, .. }) = session.save_score().await {
            println!("{}", Paint::yellow(format!("Score was not saved: {message}")));
        }

        self.ctx.navigator.navigate(Route::SelectRole);
        return Ok(Flow::Continue);
    }

    pub async fn login(&self, kind: AuthFlowKind, email: Option<&str>) -> Result<()> {
        self.ctx.navigator.navigate(kind.route());
        self.auth_screen(kind, email).await?;
        return Ok(());
    }

    pub fn logout(&self) -> Result<()> {
        self.remember_draft(None);
        self.ctx.logout()?;
        println!("Logged out.");
        return Ok(());
    }

    pub fn whoami(&self) -> Option<String> {
        return self.ctx.identity.get().map(|e| return e.email);
    }

    /// Runs a scenario given on the command line straight into the interview.
    pub async fn start(&self, draft: &ScenarioDraft) -> Result<()> {
        self.ctx.resume();
        if self.ctx.guard() != Route::SelectRole {
            bail!("You need to log in first. Run `mockinterview login`.");
        }

        if self.launch(draft).await? {
            while self.ctx.navigator.current() == Route::Interview {
                self.interview_screen().await?;
            }
        }

        return Ok(());
    }

    pub async fn print_sessions(&self, all: bool) -> Result<()> {
        let email = if all { None } else { self.whoami() };
        let history = SessionHistory::new(self.gateway.clone());

        let sessions = match history.list(email.as_deref()).await {
            RequestOutcome::Success(sessions) => sessions,
            outcome => {
                let message = outcome.error_message().unwrap_or_default().to_string();
                println!("{}", Paint::red(message));
                return Ok(());
            }
        };

        if sessions.is_empty() {
            println!("There are no sessions available. You should start your first one!");
        } else {
            let lines = sessions
                .iter()
                .map(format_session)
                .collect::<Vec<String>>();
            println!("{}", lines.join("\n"));
        }

        return Ok(());
    }

    pub async fn print_summary(&self, session_id: &str) -> Result<()> {
        let history = SessionHistory::new(self.gateway.clone());
        match history.summary(session_id).await {
            RequestOutcome::Success(summary) => println!("{}", format_summary(&summary)),
            RequestOutcome::Error { message, .. } => bail!(message),
        }

        return Ok(());
    }
}

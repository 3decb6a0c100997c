use serde_derive::Deserialize;
use serde_derive::Serialize;

/// The backend's answer to the next-question call when no further question
/// follows.
pub const INTERVIEW_FINISHED: &str = "Interview finished.";

/// Backend issued pair scoped to one interview screen visit. Never written to
/// durable storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHandle {
    pub session_id: String,
    #[serde(rename = "question")]
    pub current_question: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub session_id: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    #[serde(default)]
    pub feedback: String,
    pub question: String,
    pub score: Option<i64>,
}

/// One answered question during the current interview visit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterviewTurn {
    pub question: String,
    pub answer: String,
    pub feedback: String,
    pub score: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOverview {
    pub session_id: String,
    pub created_at: Option<String>,
    pub ended_at: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub level: Option<String>,
    pub overall_score: Option<f64>,
    pub user_email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRecord {
    pub index: i64,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub user_answer: String,
    #[serde(default)]
    pub feedback: String,
    pub score: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session: SessionOverview,
    #[serde(default)]
    pub turns: Vec<TurnRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnScore {
    pub index: i64,
    pub score: i64,
}

/// Body of `POST /session/{id}/score`. `overall` fills the session's
/// `overallScore` shown in the history list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub scores: Vec<TurnScore>,
    pub overall: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(default)]
    pub ok: bool,
    pub overall: Option<f64>,
}

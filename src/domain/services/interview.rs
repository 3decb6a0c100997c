#[cfg(test)]
#[path = "interview_test.rs"]
mod tests;

use std::sync::Mutex;
use std::sync::MutexGuard;

use super::Loading;
use super::SessionContext;
use crate::domain::models::send_json;
use crate::domain::models::AnswerRequest;
use crate::domain::models::AnswerResponse;
use crate::domain::models::InterviewTurn;
use crate::domain::models::Method;
use crate::domain::models::RequestOutcome;
use crate::domain::models::ScoreRequest;
use crate::domain::models::ScoreResponse;
use crate::domain::models::SessionHandle;
use crate::domain::models::SharedGateway;
use crate::domain::models::TurnScore;
use crate::domain::models::INTERVIEW_FINISHED;

struct InterviewState {
    current_question: String,
    turns: Vec<InterviewTurn>,
    finished: bool,
    error: Option<String>,
}

/// One visit to the interview screen. Turns are kept for this visit only.
pub struct InterviewSession {
    gateway: SharedGateway,
    session_id: String,
    loading: Loading,
    state: Mutex<InterviewState>,
}

impl InterviewSession {
    /// Picks up the session carried by the launch. Reaching the interview
    /// screen any other way means there is no active session.
    pub fn enter(ctx: &SessionContext, gateway: SharedGateway) -> Option<InterviewSession> {
        let handle = ctx.navigator.take_session()?;
        return Some(InterviewSession::new(handle, gateway));
    }

    pub fn new(handle: SessionHandle, gateway: SharedGateway) -> InterviewSession {
        return InterviewSession {
            gateway,
            session_id: handle.session_id,
            loading: Loading::default(),
            state: Mutex::new(InterviewState {
                finished: handle.current_question.trim().is_empty(),
                current_question: handle.current_question,
                turns: vec![],
                error: None,
            }),
        };
    }

    fn state(&self) -> MutexGuard<'_, InterviewState> {
        return self
            .state
            .lock()
            .unwrap_or_else(|poisoned| return poisoned.into_inner());
    }

    pub fn session_id(&self) -> &str {
        return &self.session_id;
    }

    pub fn current_question(&self) -> String {
        return self.state().current_question.to_string();
    }

    pub fn turns(&self) -> Vec<InterviewTurn> {
        return self.state().turns.clone();
    }

    pub fn is_finished(&self) -> bool {
        return self.state().finished;
    }

    pub fn is_loading(&self) -> bool {
        return self.loading.is_active();
    }

    pub fn error(&self) -> Option<String> {
        return self.state().error.clone();
    }

    /// Mean of the scored turns so far.
    pub fn average_score(&self) -> Option<f64> {
        let state = self.state();
        let scores = state
            .turns
            .iter()
            .filter_map(|turn| return turn.score)
            .collect::<Vec<i64>>();

        if scores.is_empty() {
            return None;
        }

        return Some(scores.iter().sum::<i64>() as f64 / scores.len() as f64);
    }

    /// Submits an answer to the current question. Returns `None` without a
    /// request for blank answers, after the interview finished, or while
    /// another answer is in flight.
    pub async fn answer(&self, text: &str) -> Option<RequestOutcome<InterviewTurn>> {
        if text.trim().is_empty() || self.is_finished() {
            return None;
        }

        let _guard = self.loading.acquire()?;
        self.state().error = None;

        let request = AnswerRequest {
            session_id: self.session_id.to_string(),
            text: text.trim().to_string(),
        };
        let outcome = send_json::<_, AnswerResponse>(
            &self.gateway,
            "/interview/answer",
            Method::Post,
            &request,
        )
        .await;

        let mut state = self.state();
        match outcome {
            RequestOutcome::Success(response) => {
                let turn = InterviewTurn {
                    question: state.current_question.to_string(),
                    answer: request.text,
                    feedback: response.feedback.trim().to_string(),
                    score: response.score,
                };

                let next = response.question.trim().to_string();
                state.finished = next.is_empty() || next == INTERVIEW_FINISHED;
                state.current_question = next;
                state.turns.push(turn.clone());

                tracing::debug!(
                    session_id = %self.session_id,
                    turns = state.turns.len(),
                    finished = state.finished,
                    "Answer recorded"
                );
                return Some(RequestOutcome::Success(turn));
            }
            RequestOutcome::Error {
                message,
                is_server_error,
            } => {
                state.error = Some(message.to_string());
                return Some(RequestOutcome::Error {
                    message,
                    is_server_error,
                });
            }
        }
    }

    /// Stores the per-turn scores and the average on the backend so the
    /// session list can show them. Returns `None` without a request when no
    /// answer was given or another request is in flight.
    pub async fn save_score(&self) -> Option<RequestOutcome<ScoreResponse>> {
        let turns = self.turns();
        if turns.is_empty() {
            return None;
        }

        let request = ScoreRequest {
            scores: turns
                .iter()
                .enumerate()
                .filter_map(|(index, turn)| {
                    return turn.score.map(|score| {
                        return TurnScore {
                            index: index as i64,
                            score,
                        };
                    });
                })
                .collect(),
            overall: self.average_score(),
        };

        let _guard = self.loading.acquire()?;
        let outcome = send_json::<_, ScoreResponse>(
            &self.gateway,
            &format!("/session/{}/score", self.session_id),
            Method::Post,
            &request,
        )
        .await;

        match &outcome {
            RequestOutcome::Success(_) => {
                tracing::debug!(
                    session_id = %self.session_id,
                    overall = ?request.overall,
                    "Score saved"
                );
            }
            RequestOutcome::Error { message, .. } => {
                self.state().error = Some(message.to_string());
            }
        }

        return Some(outcome);
    }
}

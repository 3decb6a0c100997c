use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Interview configuration as the user is filling it in. Lives only as long
/// as the scenario form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScenarioDraft {
    pub company: String,
    pub role: String,
    pub level: String,
    pub brief: String,
    pub agreed_to_terms: bool,
}

impl ScenarioDraft {
    pub fn new(company: &str, role: &str, level: &str, brief: &str) -> ScenarioDraft {
        return ScenarioDraft {
            company: company.to_string(),
            role: role.to_string(),
            level: level.to_string(),
            brief: brief.to_string(),
            agreed_to_terms: false,
        };
    }

    pub fn agree(mut self) -> ScenarioDraft {
        self.agreed_to_terms = true;
        return self;
    }
}

/// Body of `POST /session` (and `PATCH /session/{id}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    #[serde(rename = "user_text")]
    pub composed_text: String,
    pub session_id: Option<String>,
    pub company: String,
    pub role: String,
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

use serde_json::json;

pub fn session_created_fixture() -> String {
    return json!({
        "session_id": "a1b2c3d4-0000-4000-8000-000000000001",
        "question": "Walk me through how you would design an A/B test for a new ranking model."
    })
    .to_string();
}

pub fn answer_fixture() -> String {
    return json!({
        "feedback": "Clear structure. Mention guardrail metrics next time.",
        "question": "How would you detect novelty effects in that experiment?",
        "score": 7
    })
    .to_string();
}

pub fn session_list_fixture() -> String {
    return json!([
        {
            "sessionId": "a1b2c3d4-0000-4000-8000-000000000002",
            "createdAt": "2024-05-02T10:00:00",
            "endedAt": null,
            "company": "Meta",
            "role": "ML Engineer",
            "level": "L4",
            "overallScore": 7.5,
            "userEmail": "candidate@example.com"
        },
        {
            "sessionId": "a1b2c3d4-0000-4000-8000-000000000001",
            "createdAt": "2024-05-01T09:30:00",
            "endedAt": null,
            "company": "Adobe",
            "role": "Data Scientist",
            "level": null,
            "overallScore": null,
            "userEmail": null
        }
    ])
    .to_string();
}

pub fn session_summary_fixture() -> String {
    return json!({
        "session": {
            "sessionId": "a1b2c3d4-0000-4000-8000-000000000002",
            "createdAt": "2024-05-02T10:00:00",
            "company": "Meta",
            "role": "ML Engineer",
            "level": "L4",
            "overallScore": 7.5
        },
        "turns": [
            {
                "index": 0,
                "question": "What is regularization?",
                "userAnswer": "A penalty on model complexity.",
                "feedback": "Correct but brief.",
                "score": 6,
                "createdAt": "2024-05-02T10:01:00"
            },
            {
                "index": 1,
                "question": "Compare L1 and L2.",
                "userAnswer": "L1 produces sparse weights, L2 shrinks them smoothly.",
                "feedback": "Good contrast.",
                "score": 9,
                "createdAt": "2024-05-02T10:03:00"
            }
        ]
    })
    .to_string();
}

pub fn score_saved_fixture() -> String {
    return json!({
        "ok": true,
        "overall": 7.5
    })
    .to_string();
}

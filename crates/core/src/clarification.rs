//! Pre-research disambiguation: questions with bounded option sets, offered
//! when the query's scope, entity, or time range is ambiguous.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClarificationType {
    Time,
    Scope,
    Entity,
}

/// An inclusive date range binding temporal scope for the downstream
/// Analyst, e.g. `{2016-05-20, 2024-05-20}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClarificationOption {
    pub id: String,
    pub label: String,
    /// Deterministic rewrite applied to the query if this option is chosen.
    pub query_modifier: String,
    pub is_comprehensive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClarificationQuestion {
    pub question_id: String,
    pub question: String,
    pub clarification_type: ClarificationType,
    pub required: bool,
    /// 2-5 options per the Clarification Agent's contract; not enforced by
    /// the type itself, validated at the schema layer.
    pub options: Vec<ClarificationOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClarificationRequest {
    pub instruction: String,
    pub submit_label: String,
    /// 1-3 questions per the Clarification Agent's contract.
    pub questions: Vec<ClarificationQuestion>,
}

/// The caller's response to a `ClarificationRequest`: one chosen option id
/// per answered question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClarificationAnswer {
    pub question_id: String,
    pub option_id: String,
}

//! Wire types for plans, execution results, and task events
//!
//! Field names follow the JSON produced and consumed by the surrounding
//! product (`assertText`, `estimatedDuration`, `createdAt`), so every shape
//! here serializes directly to the documented format.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single typed automation step.
///
/// Steps are tagged by `type` on the wire. Unrecognized step types
/// deserialize into [`PlanStep::Unknown`] and are ignored by the executor
/// rather than failing the whole plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlanStep {
    /// Navigate to a URL carried in `value`
    Navigate {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    /// Click an element; a missing selector falls back to `"button"`
    Click {
        #[serde(skip_serializing_if = "Option::is_none")]
        selector: Option<String>,
    },
    /// Type `value` into the element at `selector`
    Type {
        #[serde(skip_serializing_if = "Option::is_none")]
        selector: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    /// Block for `timeout` milliseconds (default 2000)
    Wait {
        #[serde(skip_serializing_if = "Option::is_none")]
        timeout: Option<u64>,
    },
    /// Record a text assertion log line (no page inspection is performed)
    AssertText {
        #[serde(skip_serializing_if = "Option::is_none")]
        selector: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    /// Capture a screenshot as a `data:image/png;base64,...` URI
    Capture,
    /// Any step type this version does not recognize
    #[serde(other)]
    Unknown,
}

impl PlanStep {
    /// Step type tag as it appears on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Navigate { .. } => "navigate",
            Self::Click { .. } => "click",
            Self::Type { .. } => "type",
            Self::Wait { .. } => "wait",
            Self::AssertText { .. } => "assertText",
            Self::Capture => "capture",
            Self::Unknown => "unknown",
        }
    }
}

/// Ordered sequence of steps submitted to the plan executor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub steps: Vec<PlanStep>,

    /// Rough duration estimate in seconds, set by the planner
    #[serde(
        rename = "estimatedDuration",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_duration: Option<u64>,
}

/// Outcome of a single plan execution.
///
/// Produced once per invocation and serialized directly to stdout; `error`
/// is present only on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub success: bool,
    pub logs: Vec<String>,
    pub screenshots: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionResult {
    /// Successful result with the accumulated logs and screenshots
    pub fn ok(logs: Vec<String>, screenshots: Vec<String>) -> Self {
        Self {
            success: true,
            logs,
            screenshots,
            error: None,
        }
    }

    /// Failed result preserving whatever was produced before the error
    pub fn failed(error: impl Into<String>, logs: Vec<String>, screenshots: Vec<String>) -> Self {
        Self {
            success: false,
            logs,
            screenshots,
            error: Some(error.into()),
        }
    }
}

/// Nested result payload carried by `complete` and `error` task events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskOutcome {
    pub success: bool,
    pub output: String,
    pub screenshots: Vec<String>,
    pub logs: Vec<String>,
}

/// Progress event streamed by the task runner as JSON lines
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaskEvent {
    Start {
        message: String,
        timestamp: String,
        task: String,
        website: String,
    },
    Progress {
        message: String,
        timestamp: String,
    },
    Complete {
        message: String,
        timestamp: String,
        result: TaskOutcome,
    },
    Error {
        message: String,
        timestamp: String,
        error: String,
        result: TaskOutcome,
    },
}

impl TaskEvent {
    pub fn start(message: impl Into<String>, task: impl Into<String>, website: impl Into<String>) -> Self {
        Self::Start {
            message: message.into(),
            timestamp: now_timestamp(),
            task: task.into(),
            website: website.into(),
        }
    }

    pub fn progress(message: impl Into<String>) -> Self {
        Self::Progress {
            message: message.into(),
            timestamp: now_timestamp(),
        }
    }

    pub fn complete(message: impl Into<String>, result: TaskOutcome) -> Self {
        Self::Complete {
            message: message.into(),
            timestamp: now_timestamp(),
            result,
        }
    }

    pub fn error(message: impl Into<String>, error: impl Into<String>, result: TaskOutcome) -> Self {
        Self::Error {
            message: message.into(),
            timestamp: now_timestamp(),
            error: error.into(),
            result,
        }
    }
}

/// UTC timestamp in RFC 3339 with millisecond precision
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Task lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Draft,
    Published,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
        }
    }
}

/// Named parameter referenced from task instructions as `{{name}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskParam {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

/// Natural-language task definition consumed by the planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Identifier of the form `tsk_<hex>`
    pub id: String,
    pub name: String,
    pub website: String,
    /// May contain `{{param}}` tokens
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<TaskParam>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(rename = "createdAt", default = "now_timestamp")]
    pub created_at: String,
}

impl TaskDefinition {
    /// Create a draft task with a fresh `tsk_` identifier
    pub fn new(
        name: impl Into<String>,
        website: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("tsk_{}", Uuid::new_v4().simple()),
            name: name.into(),
            website: website.into(),
            instructions: instructions.into(),
            params: Vec::new(),
            status: TaskStatus::Draft,
            created_at: now_timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_tags_round_trip() {
        let json = r#"{"type":"navigate","value":"https://example.com"}"#;
        let step: PlanStep = serde_json::from_str(json).unwrap();
        assert_eq!(
            step,
            PlanStep::Navigate {
                value: Some("https://example.com".to_string())
            }
        );
        assert_eq!(step.kind(), "navigate");

        let json = r#"{"type":"assertText","selector":".msg","text":"Success"}"#;
        let step: PlanStep = serde_json::from_str(json).unwrap();
        assert_eq!(step.kind(), "assertText");
    }

    #[test]
    fn test_unknown_step_type_deserializes() {
        let step: PlanStep = serde_json::from_str(r#"{"type":"hover"}"#).unwrap();
        assert_eq!(step, PlanStep::Unknown);
    }

    #[test]
    fn test_plan_defaults() {
        let plan: Plan = serde_json::from_str(r#"{"steps":[]}"#).unwrap();
        assert!(plan.steps.is_empty());
        assert!(plan.estimated_duration.is_none());

        // Python-side consumers use plan.get('steps', [])
        let plan: Plan = serde_json::from_str("{}").unwrap();
        assert!(plan.steps.is_empty());
    }

    #[test]
    fn test_execution_result_error_field_omitted() {
        let result = ExecutionResult::ok(vec!["log".to_string()], vec![]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("error"));

        let result = ExecutionResult::failed("boom", vec![], vec![]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""error":"boom""#));
        assert!(json.contains(r#""success":false"#));
    }

    #[test]
    fn test_task_event_tags() {
        let event = TaskEvent::start("starting", "the task", "https://example.com");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"start""#));
        assert!(json.contains(r#""website":"https://example.com""#));

        let event = TaskEvent::progress("working");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"progress""#));
    }

    #[test]
    fn test_task_definition_id_prefix() {
        let task = TaskDefinition::new("Demo", "https://example.com", "click the button");
        assert!(task.id.starts_with("tsk_"));
        assert_eq!(task.status, TaskStatus::Draft);
    }

    #[test]
    fn test_task_definition_wire_names() {
        let json = r#"{
            "id": "tsk_1",
            "name": "Search",
            "website": "https://www.google.com",
            "instructions": "Search for {{query}}",
            "params": [{"name": "query", "required": true}],
            "status": "published",
            "createdAt": "2024-01-01T00:00:00.000Z"
        }"#;
        let task: TaskDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::Published);
        assert_eq!(task.params.len(), 1);
        assert!(task.params[0].required);
    }
}

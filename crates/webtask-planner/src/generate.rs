//! Plan generation and LLM response decoding

use std::collections::HashMap;
use tracing::debug;
use webtask_core::{Plan, PlanStep, Result, TaskDefinition, WebtaskError};

use crate::prompt::interpolate_params;

/// Deterministic fallback plan built from keywords in the instructions.
///
/// Always navigates and settles; click/type/capture steps are appended when
/// the instructions mention them.
pub fn heuristic_plan(task: &TaskDefinition, values: &HashMap<String, String>) -> Plan {
    let instructions =
        interpolate_params(&task.instructions, &task.params, values).to_lowercase();

    let mut steps = vec![
        PlanStep::Navigate {
            value: Some(task.website.clone()),
        },
        PlanStep::Wait {
            timeout: Some(2000),
        },
    ];

    if instructions.contains("click") {
        steps.push(PlanStep::Click {
            selector: Some("button".to_string()),
        });
    }

    if instructions.contains("type") || instructions.contains("paste") {
        steps.push(PlanStep::Type {
            selector: Some("input".to_string()),
            value: Some("sample text".to_string()),
        });
    }

    if instructions.contains("capture") {
        steps.push(PlanStep::Capture);
    }

    let estimated = std::cmp::max(5, steps.len() as u64 * 3);
    debug!("Heuristic plan with {} steps for {}", steps.len(), task.id);

    Plan {
        steps,
        estimated_duration: Some(estimated),
    }
}

/// Decode a plan from an LLM reply.
///
/// Models wrap the JSON in prose or code fences often enough that the
/// decoder extracts the outermost object before deserializing.
pub fn parse_plan_response(text: &str) -> Result<Plan> {
    let start = text
        .find('{')
        .ok_or_else(|| WebtaskError::InvalidPlan("no JSON object in response".to_string()))?;
    let end = text
        .rfind('}')
        .ok_or_else(|| WebtaskError::InvalidPlan("no JSON object in response".to_string()))?;

    if end < start {
        return Err(WebtaskError::InvalidPlan(
            "no JSON object in response".to_string(),
        ));
    }

    serde_json::from_str(&text[start..=end])
        .map_err(|e| WebtaskError::InvalidPlan(format!("failed to decode plan: {}", e)))
}

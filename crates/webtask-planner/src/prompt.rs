//! Planning prompt construction

use std::collections::HashMap;
use webtask_core::{TaskDefinition, TaskParam};

const PLANNING_PROMPT: &str = r##"You are a browser automation planner. Given a task, generate a deterministic JSON plan.

Task Details:
- Website: {website}
- Instructions: {instructions}
- Parameters: {params}

Generate a plan with these step types:
1. navigate: {type: "navigate", value: "https://..."}
2. click: {type: "click", selector: "button#submit"}
3. type: {type: "type", selector: "input[name='email']", value: "text"}
4. wait: {type: "wait", timeout: 2000}
5. assertText: {type: "assertText", selector: ".message", text: "Success"}
6. capture: {type: "capture"}

Return ONLY valid JSON:
{
  "steps": [...],
  "estimatedDuration": 15
}"##;

/// Replace `{{name}}` tokens in the instructions.
///
/// Precedence per parameter: runtime value, then the parameter's declared
/// default, then the empty string.
pub fn interpolate_params(
    instructions: &str,
    params: &[TaskParam],
    values: &HashMap<String, String>,
) -> String {
    let mut result = instructions.to_string();
    for param in params {
        let value = values
            .get(&param.name)
            .map(String::as_str)
            .or(param.value.as_deref())
            .unwrap_or("");
        result = result.replace(&format!("{{{{{}}}}}", param.name), value);
    }
    result
}

/// Build the LLM planning prompt for a task
pub fn planning_prompt(task: &TaskDefinition, values: &HashMap<String, String>) -> String {
    let instructions = interpolate_params(&task.instructions, &task.params, values);
    let params_json =
        serde_json::to_string(&task.params).unwrap_or_else(|_| "[]".to_string());

    PLANNING_PROMPT
        .replacen("{website}", &task.website, 1)
        .replacen("{instructions}", &instructions, 1)
        .replacen("{params}", &params_json, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, value: Option<&str>) -> TaskParam {
        TaskParam {
            name: name.to_string(),
            value: value.map(String::from),
            required: false,
        }
    }

    #[test]
    fn test_interpolation_precedence() {
        let params = vec![param("query", Some("default term"))];

        let mut values = HashMap::new();
        values.insert("query".to_string(), "runtime term".to_string());
        assert_eq!(
            interpolate_params("Search for {{query}}", &params, &values),
            "Search for runtime term"
        );

        assert_eq!(
            interpolate_params("Search for {{query}}", &params, &HashMap::new()),
            "Search for default term"
        );

        let params = vec![param("query", None)];
        assert_eq!(
            interpolate_params("Search for {{query}}", &params, &HashMap::new()),
            "Search for "
        );
    }

    #[test]
    fn test_interpolation_repeated_token() {
        let params = vec![param("name", Some("Alice"))];
        assert_eq!(
            interpolate_params("{{name}} and {{name}}", &params, &HashMap::new()),
            "Alice and Alice"
        );
    }

    #[test]
    fn test_planning_prompt_substitution() {
        let mut task =
            TaskDefinition::new("Search", "https://example.com", "search for {{query}}");
        task.params = vec![param("query", Some("rust"))];

        let prompt = planning_prompt(&task, &HashMap::new());
        assert!(prompt.contains("- Website: https://example.com"));
        assert!(prompt.contains("- Instructions: search for rust"));
        assert!(prompt.contains(r#""name":"query""#));
        // Step-type documentation must survive the placeholder substitution
        assert!(prompt.contains(r#"5. assertText: {type: "assertText""#));
    }
}

//! Task prompt template

/// Render the fixed task prompt for the autonomous agent.
///
/// The agent receives a single free-text instruction; everything else
/// (planning, navigation, retries) is its own concern.
pub fn task_prompt(website: &str, instructions: &str) -> String {
    format!(
        "\
Go to {website} and {instructions}

Please:
1. Navigate to the website
2. Execute the instructions step by step
3. Take screenshots at key moments
4. Provide detailed feedback on what you're doing
5. Report any errors or issues you encounter
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_interpolation() {
        let prompt = task_prompt("https://example.com", "fill in the signup form");
        assert!(prompt.starts_with("Go to https://example.com and fill in the signup form"));
        assert!(prompt.contains("Execute the instructions step by step"));
        assert!(prompt.contains("Take screenshots at key moments"));
    }
}

//! Prompt text for model-assisted component extraction.

/// Instructions that pin the model to a small, fixed JSON schema.
pub const SYSTEM_PROMPT: &str = "You are an expert software architect analyzing a source repository. \
Identify its main architectural components and the relationships between them.\n\n\
Respond with a JSON array and nothing else. Each item has exactly these fields:\n\
[\n  {\n    \"name\": \"ComponentName\",\n    \
\"description\": \"What the component is for, in one or two short lines\",\n    \
\"dependencies\": [\"OtherComponent\"],\n    \
\"dependency_details\": {\"OtherComponent\": \"How this component uses it\"}\n  }\n]\n\n\
Rules:\n\
1. Describe architectural components, not individual files.\n\
2. Group related files and directories into one logical component.\n\
3. Keep names short and descriptive.\n\
4. Return between 5 and 8 components; fewer only if the repository is tiny.\n\
5. Every dependency must be the exact name of another component in the array.\n\
6. Leave out relationships you are not confident about.\n\
7. Do not add fields beyond the four above.";

/// Builds the single user turn embedding the repository structure.
#[must_use]
pub fn user_message(repo: &str, structure: &str) -> String {
    format!(
        "Analyze this repository: {repo}\n\n\
         Project structure:\n```\n{structure}\n```\n\n\
         Identify the 5-8 most important architectural components and their relationships.\n\
         Return ONLY the JSON array."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_fences_structure() {
        let msg = user_message("https://github.com/acme/shop", "src/\n    app.py");
        assert!(msg.contains("https://github.com/acme/shop"));
        assert!(msg.contains("```\nsrc/\n    app.py\n```"));
    }
}

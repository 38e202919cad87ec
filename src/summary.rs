//! Natural-language architecture summary of a repository.

use std::fmt::Write as _;

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{SummaryError, UpstreamKind};
use crate::ports::{bounded, CompletionRequest, LlmClient};
use crate::structure::RepoStructure;

const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f32 = 0.5;

/// Asks the summary model for a prose analysis of the repository.
///
/// With `drill_down`, the analysis focuses on that one module. When the
/// structure is unavailable the model is told why, so it can explain the
/// problem instead of inventing an architecture.
///
/// # Errors
///
/// Returns a [`SummaryError`] if the call fails, times out, or comes back empty.
pub async fn summarize(
    llm: &dyn LlmClient,
    settings: &Settings,
    location: &str,
    structure: &RepoStructure,
    drill_down: Option<&str>,
) -> Result<String, SummaryError> {
    let request = CompletionRequest {
        model: settings.summary_model.clone(),
        system: Some(system_prompt(location, structure, drill_down)),
        prompt: user_message(location, drill_down),
        max_tokens: MAX_TOKENS,
        temperature: Some(TEMPERATURE),
    };
    debug!("requesting summary from {}", request.model);

    let response = bounded(llm.complete(&request), settings.llm_timeout())
        .await
        .map_err(SummaryError::Timeout)?
        .map_err(|e| SummaryError::Model(e.to_string()))?;

    let text = response.text.trim();
    if text.is_empty() {
        return Err(SummaryError::Empty);
    }
    info!("summary received ({} tokens)", response.completion_tokens);
    Ok(text.to_string())
}

fn system_prompt(location: &str, structure: &RepoStructure, drill_down: Option<&str>) -> String {
    let mut system = format!("You are analyzing a source repository at {location}.\n\n");

    match structure {
        Err(e) => {
            let _ = writeln!(system, "There was an issue accessing the repository: {}\n", e.message);
            system.push_str("Inform the user about this issue and suggest next steps.\n");
            match e.kind {
                UpstreamKind::AuthRequired => system.push_str(
                    "The repository is private; suggest they provide a public repository link.\n",
                ),
                UpstreamKind::NotFound => system
                    .push_str("The repository may not exist; suggest they check the URL and try again.\n"),
                _ => {}
            }
            return system;
        }
        Ok(listing) => {
            let _ = writeln!(system, "Project structure:\n```\n{listing}\n```\n");
        }
    }

    match drill_down {
        Some(module) => {
            let _ = write!(
                system,
                "Provide a detailed analysis of the \"{module}\" module specifically:\n\
                 1. Internal architecture and subcomponents\n\
                 2. Key functions and responsibilities\n\
                 3. Dependencies and relationships within the module\n\
                 4. File organization and structure\n\
                 5. Data flow within the module\n\
                 6. Key design patterns used\n\n\
                 Stay focused on the {module} module and its internal architecture."
            );
        }
        None => system.push_str(
            "Provide:\n\
             1. A high-level overview of the project architecture\n\
             2. The key components and their responsibilities\n\
             3. How data flows between components\n\
             4. The design patterns used, if identifiable\n\
             5. The technologies and frameworks used\n\
             6. Architectural strengths and potential improvements\n\n\
             Be concise but thorough.",
        ),
    }
    system
}

fn user_message(location: &str, drill_down: Option<&str>) -> String {
    match drill_down {
        Some(module) => {
            format!("Please analyze the {module} module in detail from this repository: {location}")
        }
        None => format!("Please analyze this repository: {location}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::error::UpstreamError;
    use crate::ports::{CompletionResponse, LlmFuture};

    struct RecordingStub {
        reply: &'static str,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl LlmClient for RecordingStub {
        fn complete(&self, request: &CompletionRequest) -> LlmFuture<'_> {
            self.requests.lock().unwrap().push(request.clone());
            let text = self.reply;
            Box::pin(async move { Ok(CompletionResponse::text_only(text)) })
        }
    }

    fn stub(reply: &'static str) -> RecordingStub {
        RecordingStub { reply, requests: Mutex::new(Vec::new()) }
    }

    #[tokio::test]
    async fn overview_embeds_structure() {
        let llm = stub("  A layered web app.\n");
        let structure: RepoStructure = Ok("api/\n    app.py".into());

        let text = summarize(&llm, &Settings::default(), "https://github.com/a/b", &structure, None)
            .await
            .unwrap();

        assert_eq!(text, "A layered web app.");
        let request = llm.requests.lock().unwrap()[0].clone();
        assert_eq!(request.model, crate::config::DEFAULT_SUMMARY_MODEL);
        assert_eq!(request.temperature, Some(0.5));
        let system = request.system.unwrap();
        assert!(system.contains("```\napi/\n    app.py\n```"));
        assert!(system.contains("high-level overview"));
        assert_eq!(request.prompt, "Please analyze this repository: https://github.com/a/b");
    }

    #[tokio::test]
    async fn drill_down_targets_module() {
        let llm = stub("Details.");
        let structure: RepoStructure = Ok("api/\n    app.py".into());

        summarize(&llm, &Settings::default(), "repo", &structure, Some("api")).await.unwrap();

        let request = llm.requests.lock().unwrap()[0].clone();
        assert!(request.system.unwrap().contains("analysis of the \"api\" module"));
        assert!(request.prompt.starts_with("Please analyze the api module"));
    }

    #[tokio::test]
    async fn upstream_error_is_explained_to_the_model() {
        let llm = stub("The repository is private.");
        let structure: RepoStructure = Err(UpstreamError::auth_required("https://github.com/a/b"));

        summarize(&llm, &Settings::default(), "https://github.com/a/b", &structure, None)
            .await
            .unwrap();

        let system = llm.requests.lock().unwrap()[0].system.clone().unwrap();
        assert!(system.contains("requires authentication"));
        assert!(system.contains("public repository link"));
        assert!(!system.contains("Project structure"));
    }

    #[tokio::test]
    async fn blank_reply_is_an_error() {
        let llm = stub("   ");
        let result = summarize(&llm, &Settings::default(), "r", &Ok("a".into()), None).await;
        assert!(matches!(result, Err(SummaryError::Empty)));
    }
}

//! `archsketch summarize` command.

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::structure::RepoStructure;
use crate::summary::summarize;

/// Execute the `summarize` command, printing the summary to stdout.
///
/// # Errors
///
/// Returns an error string if the summary model fails.
pub async fn run(
    ctx: &ServiceContext,
    settings: &Settings,
    location: &str,
    structure: &RepoStructure,
    module: Option<&str>,
) -> Result<(), String> {
    let text = summarize(ctx.llm.as_ref(), settings, location, structure, module)
        .await
        .map_err(|e| format!("summary failed: {e}"))?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn offline_model_reports_failure() {
        let settings = Settings::default();
        let ctx = ServiceContext::offline(&settings);
        let structure: RepoStructure = Ok("api/\n    app.py".into());

        let err = run(&ctx, &settings, "repo", &structure, None).await.unwrap_err();
        assert!(err.starts_with("summary failed"));
    }
}

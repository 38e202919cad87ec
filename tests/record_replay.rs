//! Record-replay integration tests.
//!
//! A cassette built with `CassetteRecorder` is replayed through
//! `ServiceContext::replaying()` and the full degradation pipeline, twice, to
//! show that replays are deterministic and reach the expected path.

use serde_json::json;

use archsketch::cassette::recorder::CassetteRecorder;
use archsketch::config::Settings;
use archsketch::context::ServiceContext;
use archsketch::pipeline::{DegradationController, DiagramOutcome, DiagramPath};
use archsketch::structure::RepoStructure;

const LOCATION: &str = "https://github.com/acme/shop.git";
const LISTING: &str = "frontend/\n    index.html\nbackend/\n    server.py\n    user_repository.py";
const SVG: &str = "<?xml version=\"1.0\"?>\n<svg width=\"400\"><g id=\"graph0\"/></svg>";

fn completion(text: &str) -> serde_json::Value {
    json!({ "Ok": { "text": text, "prompt_tokens": 120, "completion_tokens": 40 } })
}

async fn replay(path: &std::path::Path) -> DiagramOutcome {
    let ctx = ServiceContext::replaying(path).unwrap();
    let settings = Settings::default();
    let controller = DegradationController::new(ctx.llm.as_ref(), ctx.layout.as_ref(), &settings);
    let structure: RepoStructure = Ok(LISTING.to_string());
    controller.generate(LOCATION, &structure).await
}

#[tokio::test]
async fn replayed_model_session_is_deterministic() {
    let dir = std::env::temp_dir().join("archsketch_record_replay_model");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("model.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&cassette_path, "model", LOCATION);
    recorder.record(
        "llm",
        "complete",
        json!({ "model": "claude-3-haiku-20240307", "prompt": "..." }),
        completion(
            "```json\n[{\"name\": \"Storefront\", \"description\": \"Web UI\", \
             \"dependencies\": [\"Orders\"]},\n {\"name\": \"Orders\", \
             \"description\": \"Order service\"}]\n```",
        ),
    );
    recorder.record("layout", "layout", json!({ "dot": "digraph {}" }), json!({ "Ok": SVG }));
    let written = recorder.finish().expect("recording should succeed");
    assert_eq!(written, cassette_path);

    let first = replay(&cassette_path).await;
    assert_eq!(first.path, DiagramPath::Model);
    assert_eq!(first.svg, SVG);
    let graph = first.graph.as_ref().unwrap();
    assert!(graph.has_edge("Storefront", "Orders"));

    let second = replay(&cassette_path).await;
    assert_eq!(second.path, first.path);
    assert_eq!(second.svg, first.svg);
    assert_eq!(second.graph, first.graph);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn replayed_failures_degrade_to_minimal_diagram() {
    let dir = std::env::temp_dir().join("archsketch_record_replay_minimal");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("broken.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&cassette_path, "broken", LOCATION);
    recorder.record("llm", "complete", json!({}), completion("I cannot help with that."));
    recorder.record(
        "layout",
        "layout",
        json!({ "dot": "digraph {}" }),
        json!({ "Err": "dot: not found" }),
    );
    recorder.finish().expect("recording should succeed");

    let outcome = replay(&cassette_path).await;

    assert_eq!(outcome.path, DiagramPath::Minimal);
    assert!(outcome.svg.contains("Architecture of shop"));
    assert!(outcome.svg.contains("frontend (1 files)"));
    assert!(outcome.svg.contains("backend (2 files)"));
    let graph = outcome.graph.unwrap();
    assert!(graph.has_edge("frontend", "backend"));
    assert!(graph.has_edge("backend", "database"));

    let _ = std::fs::remove_dir_all(&dir);
}

//! Assembler wired to the real summarizer backends

use blueprint_core::samples::DEMO_SNIPPET;
use blueprint_core::{AnalysisError, BlueprintAssembler, BlueprintConfig, SummaryStatus};
use blueprint_llm::{build_summarizer, OllamaConfig, SummarizerBackend, SummarizerConfig};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ollama_config(server: &MockServer) -> SummarizerConfig {
    SummarizerConfig {
        backend: SummarizerBackend::Ollama,
        ollama: OllamaConfig {
            base_url: server.uri(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[tokio::test]
async fn template_backend_summarizes_demo() {
    let summarizer = build_summarizer(&SummarizerConfig::default()).unwrap();
    let report = BlueprintAssembler::new(summarizer).build(DEMO_SNIPPET).await.unwrap();

    assert_eq!(report.summary_status, SummaryStatus::Generated);
    assert_eq!(
        report.ai_summary,
        "Defines function database_connect(user, password). Imports os."
    );
    assert_eq!(report.metrics.cyclomatic_complexity, 5);
}

#[tokio::test]
async fn ollama_summary_reaches_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Checks a user's role and prints parity."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let summarizer = build_summarizer(&ollama_config(&server)).unwrap();
    let report = BlueprintAssembler::new(summarizer).build(DEMO_SNIPPET).await.unwrap();
    assert_eq!(report.ai_summary, "Checks a user's role and prints parity.");
}

#[tokio::test]
async fn slow_model_times_out_gracefully() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"response": "too late"}))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = SummarizerConfig {
        deadline_secs: 1,
        ..ollama_config(&server)
    };
    let summarizer = build_summarizer(&config).unwrap();
    let report = BlueprintAssembler::new(summarizer).build("x = 1\n").await.unwrap();
    assert_eq!(report.summary_status, SummaryStatus::TimedOut);
    assert_eq!(report.ai_summary, blueprint_core::SUMMARY_UNAVAILABLE);
}

#[tokio::test]
async fn required_summary_fails_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let summarizer = build_summarizer(&ollama_config(&server)).unwrap();
    let assembler = BlueprintAssembler::new(summarizer).with_config(BlueprintConfig {
        require_summary: true,
        ..Default::default()
    });
    let err = assembler.build("x = 1\n").await.unwrap_err();
    assert!(matches!(err, AnalysisError::SummaryUnavailable(_)));
    assert_eq!(err.user_message(), "The summary engine is unavailable.");
}

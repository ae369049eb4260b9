//! Dispatcher behavior against a mock backend.

use std::sync::Arc;

use titt::backend::BackendClient;
use titt::chat::Sender;
use titt::config::BackendSettings;
use titt::dispatcher::{
    Dispatcher, Fetched, ANSWER_FAILED, NO_DETAILED_SUMMARY, SUMMARY_FAILED, TRANSCRIPT_FAILED,
};
use titt::tab::FixedTab;
use titt::TittError;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

fn dispatcher_for(server: &MockServer, tab_url: &str, tab_title: &str) -> Dispatcher {
    let settings = BackendSettings {
        base_url: server.uri(),
        request_timeout_seconds: Some(5),
    };
    let backend = BackendClient::new(&settings).expect("backend client");
    Dispatcher::new(Arc::new(FixedTab::new(tab_url, tab_title)), backend)
}

#[tokio::test]
async fn transcribe_returns_backend_transcript() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transcript"))
        .and(body_json(serde_json::json!({ "link": WATCH_URL })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "transcript": "hello world" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server, WATCH_URL, "A video");
    let result = dispatcher.transcribe().await.expect("not gated");
    assert_eq!(result, Fetched::Ok("hello world".to_string()));
}

#[tokio::test]
async fn transcribe_surfaces_fixed_message_on_backend_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transcript"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server, WATCH_URL, "A video");
    let result = dispatcher.transcribe().await.expect("not gated");
    assert_eq!(result, Fetched::Failed(TRANSCRIPT_FAILED));
}

#[tokio::test]
async fn non_json_body_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server, WATCH_URL, "A video");
    let result = dispatcher.summarize().await.expect("not gated");
    assert_eq!(result, Fetched::Failed(SUMMARY_FAILED));
}

#[tokio::test]
async fn summarize_renders_both_fields_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/summarize"))
        .and(body_json(serde_json::json!({ "link": WATCH_URL })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "overview": "A", "detailed_summary": "B" }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server, WATCH_URL, "A video");
    match dispatcher.summarize().await.expect("not gated") {
        Fetched::Ok(summary) => {
            assert_eq!(summary.overview, "A");
            assert_eq!(summary.detailed_summary, "B");
        }
        Fetched::Failed(msg) => panic!("unexpected failure: {}", msg),
    }
}

#[tokio::test]
async fn summarize_falls_back_on_missing_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "overview": "A" })),
        )
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server, WATCH_URL, "A video");
    match dispatcher.summarize().await.expect("not gated") {
        Fetched::Ok(summary) => {
            assert_eq!(summary.overview, "A");
            assert_eq!(summary.detailed_summary, NO_DETAILED_SUMMARY);
        }
        Fetched::Failed(msg) => panic!("unexpected failure: {}", msg),
    }
}

#[tokio::test]
async fn no_video_blocks_every_action_without_requests() {
    let server = MockServer::start().await;
    // Any request at all would violate the gate.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut dispatcher = dispatcher_for(&server, "https://example.com", "Example");

    assert!(matches!(
        dispatcher.transcribe().await,
        Err(TittError::NoVideo)
    ));
    assert!(matches!(
        dispatcher.summarize().await,
        Err(TittError::NoVideo)
    ));
    assert!(matches!(
        dispatcher.ask("What is this about?").await,
        Err(TittError::NoVideo)
    ));
    assert!(matches!(
        dispatcher.mind_map().await,
        Err(TittError::NoVideo)
    ));
    assert!(matches!(
        dispatcher.export_pdf().await,
        Err(TittError::NoVideo)
    ));
    assert!(dispatcher.chat_log().is_empty());
}

#[tokio::test]
async fn ask_appends_user_then_bot_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_json(serde_json::json!({
            "link": WATCH_URL,
            "question": "What is this about?"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "answer": "Cats." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut dispatcher = dispatcher_for(&server, WATCH_URL, "A video");
    let turn = dispatcher.ask("What is this about?").await.expect("not gated");
    assert_eq!(turn.sender(), Sender::Bot);
    assert_eq!(turn.text(), "Cats.");

    let turns = dispatcher.chat_log().turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].sender(), Sender::User);
    assert_eq!(turns[0].text(), "What is this about?");
    assert_eq!(turns[1].sender(), Sender::Bot);
}

#[tokio::test]
async fn ask_failure_keeps_user_turn_and_adds_failure_bubble() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut dispatcher = dispatcher_for(&server, WATCH_URL, "A video");
    let turn = dispatcher.ask("What is this about?").await.expect("not gated");
    assert_eq!(turn.text(), ANSWER_FAILED);

    let turns = dispatcher.chat_log().turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].sender(), Sender::User);
    assert_eq!(turns[0].text(), "What is this about?");
    assert_eq!(turns[1].sender(), Sender::Bot);
    assert_eq!(turns[1].text(), ANSWER_FAILED);
}

#[tokio::test]
async fn empty_question_is_blocked_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut dispatcher = dispatcher_for(&server, WATCH_URL, "A video");

    assert!(matches!(
        dispatcher.ask("").await,
        Err(TittError::EmptyQuestion)
    ));
    assert!(matches!(
        dispatcher.ask("   \t ").await,
        Err(TittError::EmptyQuestion)
    ));
    assert!(dispatcher.chat_log().is_empty());
}

#[tokio::test]
async fn ask_trims_the_question() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_json(serde_json::json!({
            "link": WATCH_URL,
            "question": "Why?"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "answer": "Because." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut dispatcher = dispatcher_for(&server, WATCH_URL, "A video");
    dispatcher.ask("  Why?  ").await.expect("not gated");
    assert_eq!(dispatcher.chat_log().turns()[0].text(), "Why?");
}

#[tokio::test]
async fn mind_map_parses_node_tree() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mindmap"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "root",
            "children": [
                { "name": "a", "children": [{ "name": "a1" }] },
                { "name": "b" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server, WATCH_URL, "A video");
    match dispatcher.mind_map().await.expect("not gated") {
        Fetched::Ok(tree) => {
            assert_eq!(tree.name, "root");
            assert_eq!(tree.node_count(), 4);
            assert_eq!(tree.depth(), 3);
        }
        Fetched::Failed(msg) => panic!("unexpected failure: {}", msg),
    }
}

#[tokio::test]
async fn export_pdf_returns_raw_bytes() {
    let payload: &[u8] = b"%PDF-1.4 fake";

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/export-pdf"))
        .and(body_json(serde_json::json!({ "link": WATCH_URL })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server, WATCH_URL, "A video");
    match dispatcher.export_pdf().await.expect("not gated") {
        Fetched::Ok(bytes) => assert_eq!(bytes, payload),
        Fetched::Failed(msg) => panic!("unexpected failure: {}", msg),
    }
}

#[tokio::test]
async fn short_link_dispatches_with_the_short_url() {
    // Short links classify as video even though no ID is extractable,
    // so the action goes through with the short URL as the link.
    let short = "https://youtu.be/dQw4w9WgXcQ";

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transcript"))
        .and(body_json(serde_json::json!({ "link": short })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "transcript": "ok" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server, short, "A video");
    let result = dispatcher.transcribe().await.expect("not gated");
    assert_eq!(result, Fetched::Ok("ok".to_string()));
}

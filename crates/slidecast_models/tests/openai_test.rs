use slidecast_core::{GenerateRequest, Message};
use slidecast_error::{ProviderErrorKind, SlidecastErrorKind};
use slidecast_models::{ChatCompletionResponse, OpenAiClient};
use slidecast_rate_limit::LanguageModelConfig;

fn client() -> OpenAiClient {
    OpenAiClient::new(
        "sk-test",
        LanguageModelConfig {
            base_url: "http://localhost:9999/".to_string(),
            ..Default::default()
        },
    )
}

fn request() -> GenerateRequest {
    GenerateRequest::new(vec![
        Message::system("Answer in slides."),
        Message::user("What is ownership?"),
    ])
    .with_json_mode(true)
}

#[test]
fn test_request_targets_chat_completions() {
    let http = client().build_request(&request()).unwrap();

    assert_eq!(http.method(), reqwest::Method::POST);
    assert_eq!(http.url().as_str(), "http://localhost:9999/v1/chat/completions");
    assert_eq!(
        http.headers().get("authorization").unwrap(),
        "Bearer sk-test"
    );
}

#[test]
fn test_request_body_applies_defaults() {
    let http = client().build_request(&request()).unwrap();
    let body: serde_json::Value =
        serde_json::from_slice(http.body().unwrap().as_bytes().unwrap()).unwrap();

    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["max_tokens"], 4095);
    assert_eq!(body["response_format"]["type"], "json_object");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "What is ownership?");
    assert!(body.get("temperature").is_none());
}

#[test]
fn test_request_overrides_model_and_omits_format() {
    let req = GenerateRequest::new(vec![Message::user("Title this")])
        .with_model("gpt-4o-mini")
        .with_max_tokens(30);
    let body = client().request_body(&req);

    assert_eq!(body.model, "gpt-4o-mini");
    assert_eq!(body.max_tokens, Some(30));
    assert!(body.response_format.is_none());
}

#[test]
fn test_parses_first_choice() {
    let body: ChatCompletionResponse = serde_json::from_str(
        r#"{"id":"c1","model":"gpt-4o-2024-08-06","choices":[
            {"index":0,"message":{"role":"assistant","content":"{\"slides\":[]}"},"finish_reason":"stop"},
            {"index":1,"message":{"role":"assistant","content":"ignored"}}
        ]}"#,
    )
    .unwrap();

    let response = body.into_generate_response().unwrap();
    assert_eq!(response.text, r#"{"slides":[]}"#);
    assert_eq!(response.model.as_deref(), Some("gpt-4o-2024-08-06"));
}

#[test]
fn test_no_choices_is_empty_response() {
    let body: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
    let err = body.into_generate_response().unwrap_err();

    assert!(matches!(err.kind, ProviderErrorKind::EmptyResponse(_)));
}

#[test]
fn test_from_config_requires_key() {
    let config = LanguageModelConfig {
        api_key_env: "SLIDECAST_TEST_UNSET_OPENAI_KEY".to_string(),
        ..Default::default()
    };
    let err = OpenAiClient::from_config(config).unwrap_err();

    assert!(matches!(
        err.kind(),
        SlidecastErrorKind::Provider(e) if matches!(e.kind, ProviderErrorKind::MissingApiKey(_))
    ));
}

#[test]
fn test_reports_provider_and_model() {
    use slidecast_interface::LanguageModel;

    let client = client();
    assert_eq!(client.provider_name(), "openai");
    assert_eq!(client.model_name(), "gpt-4o");
    assert_eq!(client.config().title_model, "gpt-4o-mini");
}

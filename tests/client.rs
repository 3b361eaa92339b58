//! Drives `ApiClient` and `FormController` against a mocked prediction service.

use std::time::Duration;

use agri_yield::core::{
    render::{
        select_panel,
        Panel,
    },
    Action,
    ApiClient,
    ApiResponse,
    BackendErrorPayload,
    Completion,
    CropType,
    FormController,
};
use serde_json::json;
use wiremock::{
    matchers::{
        body_json,
        method,
        path,
    },
    Mock,
    MockServer,
    ResponseTemplate,
};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), Duration::from_secs(5)).expect("client")
}

fn filled_form() -> FormController {
    let mut controller = FormController::new(CropType::Corn);
    controller.fields.temperature = "22.5".into();
    controller.fields.rainfall = "100".into();
    controller.fields.soil_ph = "6.5".into();
    controller
}

async fn run_analyze(controller: &mut FormController, client: &ApiClient) {
    if let Some(data) = controller.begin_analyze() {
        let result = client.analyze(&data).await;
        controller.complete(Completion::from_result(result, Action::Analyze));
    }
}

async fn run_retrain(controller: &mut FormController, client: &ApiClient) {
    controller.begin_retrain();
    let result = client.retrain().await;
    controller.complete(Completion::from_result(result, Action::Retrain));
}

#[tokio::test]
async fn invalid_input_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = filled_form();
    controller.fields.temperature = "abc".into();

    run_analyze(&mut controller, &client).await;

    match select_panel(controller.view()) {
        Panel::Error(payload) => {
            assert_eq!(payload.status_code, 400);
            assert_eq!(payload.error_type, "FrontendValidationError");
        }
        other => panic!("expected validation panel, got {other:?}"),
    }
    server.verify().await;
}

#[tokio::test]
async fn successful_analysis_renders_message_and_yield() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_json(json!({
            "temperature": 22.5,
            "rainfall": 100.0,
            "soil_ph": 6.5,
            "crop_type": "Corn"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "ok", "predicted_yield": "4.2 t/ha" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = filled_form();
    run_analyze(&mut controller, &client).await;

    assert!(!controller.view().is_error);
    match select_panel(controller.view()) {
        Panel::Prediction(prediction) => {
            assert_eq!(prediction.message, "ok");
            assert_eq!(prediction.predicted_yield, "4.2 t/ha");
        }
        other => panic!("expected prediction panel, got {other:?}"),
    }
}

#[tokio::test]
async fn structured_server_error_is_shown_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "status_code": 503,
            "error_type": "ModelNotLoadedError",
            "message": "Model Not Loaded: still warming up"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = filled_form();
    run_analyze(&mut controller, &client).await;

    let expected =
        BackendErrorPayload::new(503, "ModelNotLoadedError", "Model Not Loaded: still warming up");
    assert!(controller.view().is_error);
    assert_eq!(select_panel(controller.view()), Panel::Error(&expected));
}

#[tokio::test]
async fn empty_error_response_becomes_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = filled_form();
    run_analyze(&mut controller, &client).await;

    let expected = BackendErrorPayload::new(500, "NetworkError", "Request failed with status code 502");
    assert_eq!(select_panel(controller.view()), Panel::Error(&expected));
}

#[tokio::test]
async fn unreachable_service_becomes_network_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let mut controller = filled_form();
    run_analyze(&mut controller, &client).await;

    match select_panel(controller.view()) {
        Panel::Error(payload) => {
            assert_eq!(payload.status_code, 500);
            assert_eq!(payload.error_type, "NetworkError");
            assert!(!payload.message.is_empty());
        }
        other => panic!("expected network error panel, got {other:?}"),
    }
}

#[tokio::test]
async fn retrain_uses_generic_success_panel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/retrain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Model successfully retrained. New version: 2."
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut controller = FormController::new(CropType::Rice);
    controller.fields.temperature = "not read".into();
    run_retrain(&mut controller, &client).await;

    assert_eq!(
        select_panel(controller.view()),
        Panel::Success { message: "Model successfully retrained. New version: 2." }
    );
    server.verify().await;
}

#[tokio::test]
async fn unrecognized_body_is_dumped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/retrain"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.retrain().await;
    let completion = Completion::from_result(result, Action::Retrain);

    assert!(completion.is_error);
    assert_eq!(completion.response, ApiResponse::Raw(json!("upstream exploded")));
}

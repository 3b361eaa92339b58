use super::{
    controller::ResponseView,
    models::{
        ApiResponse,
        BackendErrorPayload,
        PredictionResponse,
    },
};

pub const SUCCESS_STATUS: &str = "success";

/// Which block the response area should draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel<'a> {
    Loading,
    Empty,
    Error(&'a BackendErrorPayload),
    Prediction(&'a PredictionResponse),
    Success { message: &'a str },
    Raw { text: String, is_error: bool },
}

pub fn select_panel(view: &ResponseView) -> Panel<'_> {
    if view.is_loading {
        return Panel::Loading;
    }

    let Some(response) = &view.response else {
        return Panel::Empty;
    };

    match (response, view.is_error) {
        (response, _) if response.is_blank() => Panel::Empty,
        (ApiResponse::Error(payload), true) => Panel::Error(payload),
        (ApiResponse::Prediction(prediction), false) => Panel::Prediction(prediction),
        (ApiResponse::Success(success), false) if success.status == SUCCESS_STATUS => {
            Panel::Success { message: &success.message }
        }
        (response, is_error) => Panel::Raw { text: response.dump(), is_error },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::core::models::SuccessResponse;

    fn view(response: ApiResponse, is_error: bool) -> ResponseView {
        ResponseView { response: Some(response), is_error, is_loading: false }
    }

    fn prediction() -> ApiResponse {
        ApiResponse::Prediction(PredictionResponse {
            message: "ok".into(),
            predicted_yield: "4.2 t/ha".into(),
        })
    }

    #[test]
    fn loading_wins_over_everything() {
        let mut state = view(prediction(), false);
        state.is_loading = true;
        assert_eq!(select_panel(&state), Panel::Loading);
    }

    #[test]
    fn nothing_to_show_without_response() {
        assert_eq!(select_panel(&ResponseView::default()), Panel::Empty);
        assert_eq!(select_panel(&view(ApiResponse::from_body(""), false)), Panel::Empty);
    }

    #[test]
    fn prediction_panel_shows_message_and_yield() {
        let state = view(prediction(), false);
        match select_panel(&state) {
            Panel::Prediction(p) => {
                assert_eq!(p.message, "ok");
                assert_eq!(p.predicted_yield, "4.2 t/ha");
            }
            other => panic!("unexpected panel {other:?}"),
        }
    }

    #[test]
    fn error_panel_requires_error_flag() {
        let payload = BackendErrorPayload::new(400, "FrontendValidationError", "bad");
        let state = view(ApiResponse::Error(payload.clone()), true);
        assert_eq!(select_panel(&state), Panel::Error(&payload));

        let unflagged = view(ApiResponse::Error(payload), false);
        assert!(matches!(select_panel(&unflagged), Panel::Raw { is_error: false, .. }));
    }

    #[test]
    fn success_panel_requires_success_status() {
        let done = view(
            ApiResponse::Success(SuccessResponse { status: "success".into(), message: "done".into() }),
            false,
        );
        assert_eq!(select_panel(&done), Panel::Success { message: "done" });

        let pending = view(
            ApiResponse::Success(SuccessResponse { status: "queued".into(), message: "later".into() }),
            false,
        );
        assert!(matches!(select_panel(&pending), Panel::Raw { is_error: false, .. }));
    }

    #[test]
    fn prediction_marked_as_error_falls_back_to_red_dump() {
        let state = view(prediction(), true);
        match select_panel(&state) {
            Panel::Raw { text, is_error } => {
                assert!(is_error);
                assert!(text.contains("\"predicted_yield\": \"4.2 t/ha\""));
            }
            other => panic!("unexpected panel {other:?}"),
        }
    }

    #[test]
    fn unrecognized_body_is_dumped() {
        let state = view(ApiResponse::Raw(json!("upstream timed out")), true);
        assert_eq!(
            select_panel(&state),
            Panel::Raw { text: "upstream timed out".into(), is_error: true }
        );
    }
}

use super::{
    form::FormFields,
    http::Completion,
    models::{
        ApiResponse,
        CropData,
        CropType,
    },
};

/// Everything the response panel looks at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseView {
    pub response: Option<ApiResponse>,
    pub is_error: bool,
    pub is_loading: bool,
}

impl ResponseView {
    fn reset_for_request(&mut self) {
        self.response = None;
        self.is_error = false;
        self.is_loading = true;
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    pub fields: FormFields,
    view: ResponseView,
}

impl FormController {
    pub fn new(default_crop: CropType) -> Self {
        Self { fields: FormFields::with_crop(default_crop), view: ResponseView::default() }
    }

    pub fn view(&self) -> &ResponseView {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_loading
    }

    /// Starts an analyze action. Returns the payload to send, or `None` when
    /// the fields did not validate and the local error is already in place.
    pub fn begin_analyze(&mut self) -> Option<CropData> {
        self.view.reset_for_request();

        match self.fields.parse() {
            Ok(data) => Some(data),
            Err(payload) => {
                tracing::warn!(reason = %payload.message, "Form rejected before sending");
                self.complete(Completion::failure(ApiResponse::Error(payload)));
                None
            }
        }
    }

    pub fn begin_retrain(&mut self) {
        self.view.reset_for_request();
    }

    pub fn complete(&mut self, completion: Completion) {
        self.view.response = Some(completion.response);
        self.view.is_error = completion.is_error;
        self.view.is_loading = false;
    }
}

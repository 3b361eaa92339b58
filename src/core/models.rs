use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CropType {
    #[default]
    Corn,
    Wheat,
    Rice,
    Soybean,
    Potato,
}

impl CropType {
    pub const ALL: [CropType; 5] =
        [CropType::Corn, CropType::Wheat, CropType::Rice, CropType::Soybean, CropType::Potato];

    pub fn name(&self) -> &'static str {
        match self {
            CropType::Corn => "Corn",
            CropType::Wheat => "Wheat",
            CropType::Rice => "Rice",
            CropType::Soybean => "Soybean",
            CropType::Potato => "Potato",
        }
    }
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropData {
    pub temperature: f64,
    pub rainfall: f64,
    pub soil_ph: f64,
    pub crop_type: CropType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub message: String,
    pub predicted_yield: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendErrorPayload {
    pub status_code: u16,
    pub error_type: String,
    pub message: String,
}

impl BackendErrorPayload {
    pub fn new(status_code: u16, error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self { status_code, error_type: error_type.into(), message: message.into() }
    }
}

/// The last thing the backend (or the client itself) had to say.
///
/// The wire format carries no tag, so [`ApiResponse::classify`] picks the
/// variant from the fields present. Bodies that fit no shape are kept as
/// [`ApiResponse::Raw`] so they can still be shown.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Prediction(PredictionResponse),
    Success(SuccessResponse),
    Error(BackendErrorPayload),
    Raw(Value),
}

impl ApiResponse {
    pub fn classify(value: Value) -> Self {
        let decoded = if has_field(&value, "error_type") {
            serde_json::from_value(value.clone()).ok().map(ApiResponse::Error)
        } else if has_field(&value, "predicted_yield") {
            serde_json::from_value(value.clone()).ok().map(ApiResponse::Prediction)
        } else if has_field(&value, "status") {
            serde_json::from_value(value.clone()).ok().map(ApiResponse::Success)
        } else {
            None
        };

        decoded.unwrap_or(ApiResponse::Raw(value))
    }

    /// Decodes a response body. Text that is not JSON is kept verbatim as a string.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::classify(value),
            Err(_) => ApiResponse::Raw(Value::String(body.to_string())),
        }
    }

    /// Text for the fallback dump: strings as-is, everything else as indented JSON.
    pub fn dump(&self) -> String {
        let pretty = match self {
            ApiResponse::Raw(Value::String(text)) => return text.clone(),
            ApiResponse::Raw(value) => serde_json::to_string_pretty(value),
            ApiResponse::Prediction(data) => serde_json::to_string_pretty(data),
            ApiResponse::Success(data) => serde_json::to_string_pretty(data),
            ApiResponse::Error(data) => serde_json::to_string_pretty(data),
        };

        pretty.unwrap_or_else(|e| format!("<unprintable response: {e}>"))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, ApiResponse::Raw(Value::String(text)) if text.is_empty())
    }
}

fn has_field(value: &Value, field: &str) -> bool {
    value.as_object().is_some_and(|object| object.contains_key(field))
}

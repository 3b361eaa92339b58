pub mod controller;
pub mod errors;
pub mod form;
pub mod http;
pub mod models;
pub mod render;
pub mod tasks;

pub use controller::{
    FormController,
    ResponseView,
};
pub use errors::AgriError;
pub use http::{
    Action,
    ApiClient,
    Completion,
};
pub use models::{
    ApiResponse,
    BackendErrorPayload,
    CropData,
    CropType,
    PredictionResponse,
    SuccessResponse,
};

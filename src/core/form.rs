use super::models::{
    BackendErrorPayload,
    CropData,
    CropType,
};

pub const VALIDATION_ERROR_TYPE: &str = "FrontendValidationError";
pub const INVALID_NUMBER_MESSAGE: &str =
    "Temperature, rainfall, and soil pH must be valid numbers.";
pub const SOIL_PH_RANGE_MESSAGE: &str = "Soil pH must be between 0 and 14.";

const SOIL_PH_RANGE: std::ops::RangeInclusive<f64> = 0.0..=14.0;

/// Raw text as typed into the form. Only parsed on submit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormFields {
    pub temperature: String,
    pub rainfall: String,
    pub soil_ph: String,
    pub crop_type: CropType,
}

impl FormFields {
    pub fn with_crop(crop_type: CropType) -> Self {
        Self { crop_type, ..Self::default() }
    }

    pub fn parse(&self) -> Result<CropData, BackendErrorPayload> {
        let (Some(temperature), Some(rainfall), Some(soil_ph)) =
            (parse_number(&self.temperature), parse_number(&self.rainfall), parse_number(&self.soil_ph))
        else {
            return Err(validation_error(INVALID_NUMBER_MESSAGE));
        };

        if !SOIL_PH_RANGE.contains(&soil_ph) {
            return Err(validation_error(SOIL_PH_RANGE_MESSAGE));
        }

        Ok(CropData { temperature, rainfall, soil_ph, crop_type: self.crop_type })
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn validation_error(message: &str) -> BackendErrorPayload {
    BackendErrorPayload::new(400, VALIDATION_ERROR_TYPE, message)
}

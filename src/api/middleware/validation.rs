use validator::Validate;

use crate::api::errors::ApiError;

/// Validate extracted parameters, joining the field messages into one
/// 400 response
pub fn validate_params<T>(params: &T) -> Result<(), ApiError>
where
    T: Validate,
{
    params.validate().map_err(|validation_errors| {
        let mut messages: Vec<String> = validation_errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|cow| cow.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        messages.sort();

        ApiError::bad_request(format!("Validation failed: {}", messages.join("; ")))
    })
}

pub mod events;
pub mod users;

use crate::utils::error::AppError;

/// Presence check for a wire field; absence is a validation failure named
/// after the wire label.
pub(crate) fn required<T>(field: &'static str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("El campo '{}' es obligatorio", field)))
}

pub mod appointments;
pub mod doctors;
pub mod messages;
pub mod patients;
pub mod sessions;

use crate::error::{ClinicError, ClinicResult};

/// Rejects a required text field that is empty or only whitespace.
pub fn require_field(value: &str, field: &'static str) -> ClinicResult<()> {
    if value.trim().is_empty() {
        return Err(ClinicError::ValidationMissing(field));
    }
    Ok(())
}

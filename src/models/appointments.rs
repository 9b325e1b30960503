use serde::{Deserialize, Serialize};

use super::require_field;
use crate::error::ClinicResult;

/// A booking. `doctor_name` and `fee` are copied from the doctor when the
/// appointment is made and never follow later changes to that doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_email: String,
    pub doctor_email: String,
    pub doctor_name: String,
    pub fee: f64,
    pub date: String,
    pub time: String,
}

impl Appointment {
    pub fn validate(&self) -> ClinicResult<()> {
        require_field(&self.patient_email, "patientEmail")?;
        require_field(&self.doctor_email, "doctor")?;
        require_field(&self.date, "date")?;
        require_field(&self.time, "time")
    }
}

use serde::{Deserialize, Serialize};

use super::require_field;
use crate::error::ClinicResult;

pub const DEFAULT_SPECIALIZATION: &str = "General";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Non-negative, in whole or fractional currency units.
    #[serde(default)]
    pub fee: f64,
    #[serde(default = "default_specialization")]
    pub specialization: String,
    pub password: String,
}

impl Doctor {
    pub fn validate(&self) -> ClinicResult<()> {
        require_field(&self.name, "name")?;
        require_field(&self.email, "email")?;
        require_field(&self.password, "password")
    }
}

fn default_specialization() -> String {
    DEFAULT_SPECIALIZATION.to_string()
}

/// The two doctors every empty store starts with.
pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: "d1".to_string(),
            name: "Dr. A. Kumar".to_string(),
            email: "doc1@example.com".to_string(),
            fee: 300.0,
            specialization: "General".to_string(),
            password: "doc1pass".to_string(),
        },
        Doctor {
            id: "d2".to_string(),
            name: "Dr. S. Rao".to_string(),
            email: "doc2@example.com".to_string(),
            fee: 500.0,
            specialization: "Cardio".to_string(),
            password: "doc2pass".to_string(),
        },
    ]
}

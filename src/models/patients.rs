use serde::{Deserialize, Serialize};

use super::require_field;
use crate::error::ClinicResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub gender: String,
}

impl Patient {
    pub fn validate(&self) -> ClinicResult<()> {
        require_field(&self.email, "email")?;
        require_field(&self.password, "password")
    }
}

use serde::{Deserialize, Serialize};

use super::require_field;
use crate::error::ClinicResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub message: String,
    pub created: String,
}

impl Message {
    pub fn validate(&self) -> ClinicResult<()> {
        require_field(&self.email, "email")?;
        require_field(&self.message, "message")
    }
}

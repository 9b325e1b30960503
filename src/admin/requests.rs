use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct TokenRequest {
    pub login_token: String,
}

/// Form fields arrive either as JSON numbers or as the raw text of an
/// input box.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum FeeInput {
    Number(f64),
    Text(String),
}

impl Default for FeeInput {
    fn default() -> Self {
        FeeInput::Text(String::new())
    }
}

#[derive(Deserialize)]
pub struct AddDoctorRequest {
    pub login_token: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub fee: FeeInput,
    #[serde(default)]
    pub specialization: String,
    pub password: String,
}

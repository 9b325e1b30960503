use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
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

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct TokenRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct BookRequest {
    pub login_token: String,
    #[serde(default)]
    pub doctor_email: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

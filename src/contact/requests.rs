use serde::Deserialize;

#[derive(Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
pub struct MessagesRequest {}

use serde::Serialize;

use crate::models::messages::Message;

#[derive(Default, Serialize)]
pub struct MessageItem {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created: String,
}

impl From<Message> for MessageItem {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            name: message.name,
            email: message.email,
            message: message.message,
            created: message.created,
        }
    }
}

#[derive(Default, Serialize)]
pub struct MessagesResponse {
    pub success: bool,
    pub err: String,
    pub messages: Vec<MessageItem>,
}

crate::impl_err_response! {
    MessagesResponse,
}

mod requests;
mod responses;

use crate::{
    models::messages::Message,
    protocol::SimpleResponse,
    repository::MessageRepository,
    state::{with_store, AppState},
};
use actix_web::{post, web, HttpResponse, Responder};
use chrono::Utc;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(send).service(messages);
}

crate::post_funcs! {
    (send, "/send", SendRequest, SimpleResponse),
    (messages, "/messages", MessagesRequest, MessagesResponse),
}

async fn send_impl(
    state: web::Data<AppState>,
    info: web::Json<SendRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    let created = crate::utils::format_time_str(&Utc::now());

    let id = with_store(&state, move |store| {
        let mut repo = MessageRepository::new(store);
        let message = Message {
            id: repo.next_id()?,
            name: info.name,
            email: info.email,
            message: info.message,
            created,
        };
        let id = message.id.clone();
        repo.insert(message)?;
        Ok(id)
    })
    .await?;
    tracing::info!(%id, "Contact message saved");

    Ok(SimpleResponse::ok())
}

async fn messages_impl(
    state: web::Data<AppState>,
    _info: web::Json<MessagesRequest>,
) -> anyhow::Result<MessagesResponse> {
    let msgs = with_store(&state, |store| MessageRepository::new(store).list()).await?;

    Ok(MessagesResponse {
        success: true,
        err: "".to_string(),
        messages: msgs.into_iter().map(Into::into).collect(),
    })
}

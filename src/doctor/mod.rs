mod requests;

use crate::{
    auth::Authenticator,
    models::sessions::Role,
    protocol::{AppointmentsResponse, LoginResponse, SimpleResponse},
    repository::AppointmentRepository,
    session::SessionStore,
    state::{with_store, AppState},
};
use actix_web::{post, web, HttpResponse, Responder};

use self::requests::{LoginRequest, TokenRequest};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(login).service(logout).service(appointments);
}

crate::post_funcs! {
    (login, "/login", LoginRequest, LoginResponse),
    (logout, "/logout", TokenRequest, SimpleResponse),
    (appointments, "/appointments", TokenRequest, AppointmentsResponse),
}

async fn login_impl(
    state: web::Data<AppState>,
    info: web::Json<LoginRequest>,
) -> anyhow::Result<LoginResponse> {
    let info = info.into_inner();
    let (session, current) = with_store(&state, move |store| {
        let mut session = SessionStore::new();
        let current =
            Authenticator::new(store, &mut session).login_doctor(&info.email, &info.password)?;
        Ok((session, current))
    })
    .await?;

    Ok(LoginResponse {
        success: true,
        err: "".to_string(),
        login_token: state.sessions.open(session),
        name: current.name,
    })
}

async fn logout_impl(
    state: web::Data<AppState>,
    info: web::Json<TokenRequest>,
) -> anyhow::Result<SimpleResponse> {
    state.sessions.close(&info.login_token)?;
    Ok(SimpleResponse::ok())
}

async fn appointments_impl(
    state: web::Data<AppState>,
    info: web::Json<TokenRequest>,
) -> anyhow::Result<AppointmentsResponse> {
    let current = state.sessions.require(&info.login_token, Role::Doctor)?;

    let appos = with_store(&state, move |store| {
        AppointmentRepository::new(store).list_for_doctor(&current.email)
    })
    .await?;

    Ok(AppointmentsResponse {
        success: true,
        err: "".to_string(),
        appointments: appos.into_iter().map(Into::into).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{booking, state::testing::test_state};
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn doctor_sees_only_own_bookings() {
        let (_dir, state) = test_state();
        with_store(&state, |store| {
            booking::book(&mut *store, "p@example.com", "doc1@example.com", "2024-05-01", "10:00")?;
            booking::book(&mut *store, "q@example.com", "doc2@example.com", "2024-05-02", "11:00")?;
            booking::book(store, "q@example.com", "doc1@example.com", "2024-05-03", "09:30")
        })
        .await
        .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(web::scope("/doctor").configure(config)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/doctor/login")
            .set_json(json!({"email": "doc1@example.com", "password": "doc1pass"}))
            .to_request();
        let res: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(res["name"], "Dr. A. Kumar");
        let token = res["login_token"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/doctor/appointments")
            .set_json(json!({ "login_token": token }))
            .to_request();
        let res: Value = test::call_and_read_body_json(&app, req).await;
        let patients: Vec<&str> = res["appointments"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["patient_email"].as_str().unwrap())
            .collect();
        assert_eq!(patients, vec!["p@example.com", "q@example.com"]);
    }

    #[actix_web::test]
    async fn patient_token_cannot_read_doctor_view() {
        let (_dir, state) = test_state();
        let mut store = SessionStore::new();
        store
            .set_current_user(&crate::models::sessions::Session {
                role: Role::Patient,
                email: "doc1@example.com".to_string(),
                name: "Imposter".to_string(),
            })
            .unwrap();
        let token = state.sessions.open(store);

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(web::scope("/doctor").configure(config)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/doctor/appointments")
            .set_json(json!({ "login_token": token }))
            .to_request();
        let res: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(res["success"], false);
        assert_eq!(res["err"], "Please login as doctor");
    }
}

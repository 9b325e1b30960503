mod requests;
mod responses;

use crate::{
    auth::Authenticator,
    booking,
    models::{patients::Patient, sessions::Role},
    protocol::{AppointmentsResponse, LoginResponse, SimpleResponse},
    repository::{AppointmentRepository, DoctorRepository},
    session::SessionStore,
    state::{with_store, AppState},
};
use actix_web::{post, web, HttpResponse, Responder};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(register)
        .service(login)
        .service(logout)
        .service(doctors)
        .service(book)
        .service(appointments);
}

crate::post_funcs! {
    (register, "/register", RegisterRequest, SimpleResponse),
    (login, "/login", LoginRequest, LoginResponse),
    (logout, "/logout", TokenRequest, SimpleResponse),
    (doctors, "/doctors", TokenRequest, DoctorsResponse),
    (book, "/book", BookRequest, BookResponse),
    (appointments, "/appointments", TokenRequest, AppointmentsResponse),
}

async fn register_impl(
    state: web::Data<AppState>,
    info: web::Json<RegisterRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    let patient = Patient {
        email: info.email,
        password: info.password,
        first_name: info.first_name,
        last_name: info.last_name,
        contact: info.contact,
        gender: info.gender,
    };

    with_store(&state, move |store| {
        let mut session = SessionStore::new();
        Authenticator::new(store, &mut session).register_patient(patient)
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn login_impl(
    state: web::Data<AppState>,
    info: web::Json<LoginRequest>,
) -> anyhow::Result<LoginResponse> {
    let info = info.into_inner();
    let (session, current) = with_store(&state, move |store| {
        let mut session = SessionStore::new();
        let current =
            Authenticator::new(store, &mut session).login_patient(&info.email, &info.password)?;
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

async fn doctors_impl(
    state: web::Data<AppState>,
    info: web::Json<TokenRequest>,
) -> anyhow::Result<DoctorsResponse> {
    state.sessions.require(&info.login_token, Role::Patient)?;

    let docs = with_store(&state, |store| DoctorRepository::new(store).list()).await?;

    Ok(DoctorsResponse {
        success: true,
        err: "".to_string(),
        doctors: docs.into_iter().map(Into::into).collect(),
    })
}

async fn book_impl(
    state: web::Data<AppState>,
    info: web::Json<BookRequest>,
) -> anyhow::Result<BookResponse> {
    let info = info.into_inner();
    let current = state.sessions.require(&info.login_token, Role::Patient)?;

    let appointment = with_store(&state, move |store| {
        booking::book(
            store,
            &current.email,
            &info.doctor_email,
            &info.date,
            &info.time,
        )
    })
    .await?;

    Ok(BookResponse {
        success: true,
        err: "".to_string(),
        appointment: appointment.into(),
    })
}

async fn appointments_impl(
    state: web::Data<AppState>,
    info: web::Json<TokenRequest>,
) -> anyhow::Result<AppointmentsResponse> {
    let current = state.sessions.require(&info.login_token, Role::Patient)?;

    let appos = with_store(&state, move |store| {
        AppointmentRepository::new(store).list_for_patient(&current.email)
    })
    .await?;

    Ok(AppointmentsResponse {
        success: true,
        err: "".to_string(),
        appointments: appos.into_iter().map(Into::into).collect(),
    })
}

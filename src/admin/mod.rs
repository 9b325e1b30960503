mod requests;
mod responses;

use crate::{
    auth::Authenticator,
    models::{
        doctors::{Doctor, DEFAULT_SPECIALIZATION},
        sessions::Role,
    },
    protocol::{LoginResponse, SimpleResponse},
    repository::{AppointmentRepository, DoctorRepository, PatientRepository},
    session::SessionStore,
    state::{with_store, AppState},
};
use actix_web::{post, web, HttpResponse, Responder};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(login)
        .service(logout)
        .service(add_doctor)
        .service(overview);
}

crate::post_funcs! {
    (login, "/login", LoginRequest, LoginResponse),
    (logout, "/logout", TokenRequest, SimpleResponse),
    (add_doctor, "/add_doctor", AddDoctorRequest, AddDoctorResponse),
    (overview, "/overview", TokenRequest, OverviewResponse),
}

/// Anything unparseable, negative or not finite is 0.
fn parse_fee(fee: &FeeInput) -> f64 {
    let value = match fee {
        FeeInput::Number(value) => *value,
        FeeInput::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
    };
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

async fn login_impl(
    state: web::Data<AppState>,
    info: web::Json<LoginRequest>,
) -> anyhow::Result<LoginResponse> {
    let info = info.into_inner();
    let (session, current) = with_store(&state, move |store| {
        let mut session = SessionStore::new();
        let current =
            Authenticator::new(store, &mut session).login_admin(&info.username, &info.password)?;
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

async fn add_doctor_impl(
    state: web::Data<AppState>,
    info: web::Json<AddDoctorRequest>,
) -> anyhow::Result<AddDoctorResponse> {
    let info = info.into_inner();
    state.sessions.require(&info.login_token, Role::Admin)?;

    let fee = parse_fee(&info.fee);
    let specialization = if info.specialization.trim().is_empty() {
        DEFAULT_SPECIALIZATION.to_string()
    } else {
        info.specialization
    };

    let doctor = with_store(&state, move |store| {
        let mut doctors = DoctorRepository::new(store);
        let doctor = Doctor {
            id: doctors.next_id()?,
            name: info.name,
            email: info.email,
            fee,
            specialization,
            password: info.password,
        };
        doctors.insert(doctor.clone())?;
        Ok(doctor)
    })
    .await?;
    tracing::info!(id = %doctor.id, email = %doctor.email, "Doctor added");

    Ok(AddDoctorResponse {
        success: true,
        err: "".to_string(),
        doctor: doctor.into(),
    })
}

async fn overview_impl(
    state: web::Data<AppState>,
    info: web::Json<TokenRequest>,
) -> anyhow::Result<OverviewResponse> {
    state.sessions.require(&info.login_token, Role::Admin)?;

    let (doctors, patients, appointments) = with_store(&state, |store| {
        let doctors = DoctorRepository::new(&mut *store).list()?;
        let patients = PatientRepository::new(&mut *store).list()?;
        let appointments = AppointmentRepository::new(store).list()?;
        Ok((doctors, patients, appointments))
    })
    .await?;

    Ok(OverviewResponse {
        success: true,
        err: "".to_string(),
        doctors: doctors.into_iter().map(Into::into).collect(),
        patients: patients.into_iter().map(Into::into).collect(),
        appointments: appointments.into_iter().map(Into::into).collect(),
    })
}

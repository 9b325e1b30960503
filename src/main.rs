mod admin;
mod auth;
mod booking;
mod config;
mod contact;
mod database;
mod doctor;
mod error;
mod models;
mod patient;
mod protocol;
mod repository;
mod schema;
mod session;
mod state;
mod storage;
mod utils;

use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    repository::DoctorRepository,
    session::TabSessions,
    state::{with_store, AppState},
};

fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        // patient
        .service(web::scope("/patient").configure(patient::config))
        // doctor
        .service(web::scope("/doctor").configure(doctor::config))
        // administrator
        .service(web::scope("/admin").configure(admin::config))
        // contact form
        .service(web::scope("/contact").configure(contact::config));
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;
    let pool = database::build_pool(&config.database_url)?;
    let state = web::Data::new(AppState::new(
        pool,
        config.origin.clone(),
        TabSessions::new(config.session_idle),
    ));

    if with_store(&state, |store| DoctorRepository::new(store).seed()).await? {
        tracing::info!("Seeded bootstrap doctors");
    }

    tracing::info!(
        bind = %config.bind,
        database = %config.database_url,
        origin = %config.origin,
        "CareSync starting"
    );

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(routes);
        match &static_dir {
            Some(dir) => app.service(Files::new("/", dir).index_file("index.html")),
            None => app,
        }
    })
    .bind(&config.bind)?
    .run()
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::test_state;
    use actix_web::test;
    use serde_json::{json, Value};

    macro_rules! post {
        ($app:expr, $uri:expr, $body:expr) => {{
            let req = test::TestRequest::post()
                .uri($uri)
                .set_json($body)
                .to_request();
            let res: Value = test::call_and_read_body_json(&$app, req).await;
            res
        }};
    }

    #[actix_web::test]
    async fn full_clinic_walkthrough() {
        let (_dir, state) = test_state();
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(routes)).await;

        let res = post!(
            app,
            "/admin/login",
            json!({"username": "admin", "password": "admin123"})
        );
        let admin = res["login_token"].as_str().unwrap().to_string();
        let res = post!(
            app,
            "/admin/add_doctor",
            json!({
                "login_token": admin,
                "name": "Dr. M. Sen",
                "email": "doc3@example.com",
                "fee": "250.5",
                "specialization": "Ortho",
                "password": "doc3pass"
            })
        );
        assert_eq!(res["success"], true);

        post!(
            app,
            "/patient/register",
            json!({"email": "p@example.com", "password": "pw", "first_name": "Asha"})
        );
        let res = post!(
            app,
            "/patient/login",
            json!({"email": "p@example.com", "password": "pw"})
        );
        let patient = res["login_token"].as_str().unwrap().to_string();
        let res = post!(
            app,
            "/patient/book",
            json!({
                "login_token": patient,
                "doctor_email": "doc3@example.com",
                "date": "2024-06-10",
                "time": "15:30"
            })
        );
        assert_eq!(res["appointment"]["fee"].as_f64(), Some(250.5));

        let res = post!(
            app,
            "/doctor/login",
            json!({"email": "doc3@example.com", "password": "doc3pass"})
        );
        let doctor = res["login_token"].as_str().unwrap().to_string();
        let res = post!(app, "/doctor/appointments", json!({ "login_token": doctor }));
        assert_eq!(res["appointments"][0]["patient_email"], "p@example.com");

        let res = post!(app, "/admin/overview", json!({ "login_token": admin }));
        assert_eq!(res["doctors"].as_array().unwrap().len(), 3);
        assert_eq!(res["patients"][0]["first_name"], "Asha");
        assert_eq!(res["appointments"][0]["doctor_name"], "Dr. M. Sen");

        // patient tokens do not open the admin view
        let res = post!(app, "/admin/overview", json!({ "login_token": patient }));
        assert_eq!(res["success"], false);
    }
}

use std::sync::atomic::{AtomicU64, Ordering};

use blake2::{Blake2b512, Digest};
use chrono::{DateTime, SecondsFormat, Utc};

#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    state: web::Data<AppState>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](state, info).await {
                        Ok(response) => response,
                        Err(err) => {
                            tracing::debug!(route = $url, error = %err, "Request failed");
                            <$response>::err(err.to_string())
                        }
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

static TOKEN_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Opaque handle for a new tab-session. Unique within the process even for
/// repeated logins of the same account in the same instant.
pub fn generate_login_token(email: &str, role: &str) -> String {
    let count = TOKEN_COUNTER.fetch_add(1, Ordering::Relaxed);
    let seed = format!(
        "{}:{}:{}:{}",
        role,
        email,
        Utc::now().timestamp_nanos_opt().unwrap_or_default(),
        count
    );
    format!("{:x}", Blake2b512::digest(seed.as_bytes()))
}

/// Builds `prefix` + current unix millis, bumped until no existing id
/// collides with it.
pub fn next_id<'a, I>(prefix: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<&str> = existing.into_iter().collect();
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let id = format!("{}{}", prefix, millis);
        if !taken.contains(&id.as_str()) {
            return id;
        }
        millis += 1;
    }
}

pub fn format_time_str(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

use actix_web::web;
use diesel::SqliteConnection;

use crate::{
    database::{get_db_conn, DbPool},
    error::ClinicResult,
    session::TabSessions,
    storage::{JsonStore, SqliteBackend},
};

pub struct AppState {
    pub pool: DbPool,
    pub origin: String,
    pub sessions: TabSessions,
}

impl AppState {
    pub fn new(pool: DbPool, origin: String, sessions: TabSessions) -> Self {
        Self {
            pool,
            origin,
            sessions,
        }
    }
}

/// Runs `f` against the origin's store on the blocking pool, inside one
/// immediate transaction. Anything `f` wrote is rolled back when it fails.
pub async fn with_store<T, F>(state: &web::Data<AppState>, f: F) -> anyhow::Result<T>
where
    F: FnOnce(&mut JsonStore<SqliteBackend<'_>>) -> ClinicResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = state.pool.clone();
    let origin = state.origin.clone();
    let res = web::block(move || -> ClinicResult<T> {
        let mut conn = get_db_conn(&pool)?;
        conn.immediate_transaction(|conn: &mut SqliteConnection| {
            let mut store = JsonStore::new(SqliteBackend::new(conn, origin));
            f(&mut store)
        })
    })
    .await?;

    Ok(res?)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ClinicError,
        models::messages::Message,
        repository::{DoctorRepository, MessageRepository},
    };

    #[actix_web::test]
    async fn failed_call_rolls_back_its_writes() {
        let (_dir, state) = testing::test_state();

        let res = with_store(&state, |store| -> ClinicResult<()> {
            MessageRepository::new(store).insert(Message {
                id: "m1".to_string(),
                name: "Visitor".to_string(),
                email: "v@example.com".to_string(),
                message: "Half-written".to_string(),
                created: "2024-05-01T10:00:00.000Z".to_string(),
            })?;
            Err(ClinicError::ValidationMissing("time"))
        })
        .await;
        assert!(res.is_err());

        let messages = with_store(&state, |store| MessageRepository::new(store).list())
            .await
            .unwrap();
        assert!(messages.is_empty());
    }

    #[actix_web::test]
    async fn data_persists_between_calls() {
        let (_dir, state) = testing::test_state();

        let seeded = with_store(&state, |store| DoctorRepository::new(store).seed())
            .await
            .unwrap();
        assert!(seeded);
        let seeded_again = with_store(&state, |store| DoctorRepository::new(store).seed())
            .await
            .unwrap();
        assert!(!seeded_again);
    }
}

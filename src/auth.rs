//! Credential checks for the three roles.
//!
//! Passwords are stored and compared as plain text with exact equality.
//! There is no hashing, salting or rate limiting: the accounts here are a
//! demo, not a security boundary.

use crate::{
    error::{ClinicError, ClinicResult},
    models::{
        patients::Patient,
        sessions::{Role, Session},
    },
    repository::{DoctorRepository, PatientRepository},
    session::SessionStore,
    storage::{JsonStore, StorageBackend},
};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";
const ADMIN_DISPLAY_NAME: &str = "Administrator";

pub struct Authenticator<'a, B> {
    store: &'a mut JsonStore<B>,
    session: &'a mut SessionStore,
}

impl<'a, B: StorageBackend> Authenticator<'a, B> {
    pub fn new(store: &'a mut JsonStore<B>, session: &'a mut SessionStore) -> Self {
        Self { store, session }
    }

    pub fn login_patient(&mut self, email: &str, password: &str) -> ClinicResult<Session> {
        let patient = PatientRepository::new(&mut *self.store)
            .list()?
            .into_iter()
            .find(|p| p.email == email && p.password == password);

        match patient {
            Some(patient) => self.start(Session {
                role: Role::Patient,
                email: patient.email,
                name: patient.first_name,
            }),
            None => Err(rejected(Role::Patient, email)),
        }
    }

    pub fn login_doctor(&mut self, email: &str, password: &str) -> ClinicResult<Session> {
        let doctor = DoctorRepository::new(&mut *self.store)
            .list()?
            .into_iter()
            .find(|d| d.email == email && d.password == password);

        match doctor {
            Some(doctor) => self.start(Session {
                role: Role::Doctor,
                email: doctor.email,
                name: doctor.name,
            }),
            None => Err(rejected(Role::Doctor, email)),
        }
    }

    /// Only the built-in pair is accepted; stored accounts never grant the
    /// admin role.
    pub fn login_admin(&mut self, username: &str, password: &str) -> ClinicResult<Session> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            return Err(rejected(Role::Admin, username));
        }
        self.start(Session {
            role: Role::Admin,
            email: ADMIN_USERNAME.to_string(),
            name: ADMIN_DISPLAY_NAME.to_string(),
        })
    }

    pub fn register_patient(&mut self, patient: Patient) -> ClinicResult<()> {
        let email = patient.email.clone();
        PatientRepository::new(&mut *self.store).insert(patient)?;
        tracing::info!(%email, "Patient registered");
        Ok(())
    }

    fn start(&mut self, session: Session) -> ClinicResult<Session> {
        self.session.set_current_user(&session)?;
        tracing::info!(role = %session.role, email = %session.email, "Logged in");
        Ok(session)
    }
}

pub fn logout(session: &mut SessionStore) -> anyhow::Result<()> {
    if let Some(current) = session.get_current_user() {
        tracing::info!(role = %current.role, email = %current.email, "Logged out");
    }
    session.clear_current_user()
}

fn rejected(role: Role, who: &str) -> ClinicError {
    tracing::warn!(%role, who, "Login rejected");
    ClinicError::InvalidCredentials
}

use crate::{
    error::{ClinicError, ClinicResult},
    models::doctors::{seed_doctors, Doctor},
    storage::{JsonStore, StorageBackend, KEY_DOCTORS},
};

pub struct DoctorRepository<'s, B> {
    store: &'s mut JsonStore<B>,
}

impl<'s, B: StorageBackend> DoctorRepository<'s, B> {
    pub fn new(store: &'s mut JsonStore<B>) -> Self {
        Self { store }
    }

    /// Writes the bootstrap doctors when the slot is absent, corrupt, not an
    /// array or an empty array. Returns whether anything was written.
    pub fn seed(&mut self) -> ClinicResult<bool> {
        let existing = self.store.load_array(KEY_DOCTORS)?;
        if existing.map_or(false, |items| !items.is_empty()) {
            return Ok(false);
        }
        tracing::debug!("Seeding bootstrap doctors");
        self.store.save(KEY_DOCTORS, &seed_doctors())?;
        Ok(true)
    }

    pub fn list(&mut self) -> ClinicResult<Vec<Doctor>> {
        self.seed()?;
        Ok(self.store.load_list(KEY_DOCTORS)?)
    }

    pub fn find_by_email(&mut self, email: &str) -> ClinicResult<Option<Doctor>> {
        Ok(self.list()?.into_iter().find(|d| d.email == email))
    }

    pub fn find_by_id(&mut self, id: &str) -> ClinicResult<Option<Doctor>> {
        Ok(self.list()?.into_iter().find(|d| d.id == id))
    }

    pub fn next_id(&mut self) -> ClinicResult<String> {
        let doctors = self.list()?;
        Ok(crate::utils::next_id(
            "d",
            doctors.iter().map(|d| d.id.as_str()),
        ))
    }

    pub fn insert(&mut self, doctor: Doctor) -> ClinicResult<()> {
        doctor.validate()?;

        if self.find_by_email(&doctor.email)?.is_some() {
            return Err(ClinicError::DuplicateEmail(doctor.email));
        }
        self.store.push(KEY_DOCTORS, &doctor)?;
        Ok(())
    }
}

use crate::{
    error::{ClinicError, ClinicResult},
    models::patients::Patient,
    storage::{JsonStore, StorageBackend, KEY_PATIENTS},
};

pub struct PatientRepository<'s, B> {
    store: &'s mut JsonStore<B>,
}

impl<'s, B: StorageBackend> PatientRepository<'s, B> {
    pub fn new(store: &'s mut JsonStore<B>) -> Self {
        Self { store }
    }

    pub fn list(&mut self) -> ClinicResult<Vec<Patient>> {
        Ok(self.store.load_list(KEY_PATIENTS)?)
    }

    pub fn find_by_email(&mut self, email: &str) -> ClinicResult<Option<Patient>> {
        Ok(self.list()?.into_iter().find(|p| p.email == email))
    }

    pub fn insert(&mut self, patient: Patient) -> ClinicResult<()> {
        patient.validate()?;

        if self.find_by_email(&patient.email)?.is_some() {
            return Err(ClinicError::DuplicateEmail(patient.email));
        }
        self.store.push(KEY_PATIENTS, &patient)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn patient(email: &str, first_name: &str) -> Patient {
        Patient {
            email: email.to_string(),
            password: "pw".to_string(),
            first_name: first_name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_empty() {
        let mut store = JsonStore::new(MemoryBackend::default());
        assert!(PatientRepository::new(&mut store).list().unwrap().is_empty());
    }

    #[test]
    fn duplicate_email_is_rejected_without_changes() {
        let mut store = JsonStore::new(MemoryBackend::default());
        let mut repo = PatientRepository::new(&mut store);
        repo.insert(patient("p@example.com", "Asha")).unwrap();
        repo.insert(patient("q@example.com", "Ravi")).unwrap();

        let err = repo.insert(patient("p@example.com", "Other")).unwrap_err();
        assert!(matches!(err, ClinicError::DuplicateEmail(_)));

        let patients = repo.list().unwrap();
        assert_eq!(patients.len(), 2);
        assert_eq!(patients[0].first_name, "Asha");
        assert_eq!(patients[1].email, "q@example.com");
    }

    #[test]
    fn email_match_is_case_sensitive() {
        let mut store = JsonStore::new(MemoryBackend::default());
        let mut repo = PatientRepository::new(&mut store);
        repo.insert(patient("p@example.com", "Asha")).unwrap();
        repo.insert(patient("P@example.com", "Asha")).unwrap();

        assert_eq!(repo.list().unwrap().len(), 2);
        assert!(repo.find_by_email("P@EXAMPLE.COM").unwrap().is_none());
    }

    #[test]
    fn missing_email_is_rejected() {
        let mut store = JsonStore::new(MemoryBackend::default());
        let mut repo = PatientRepository::new(&mut store);
        let err = repo.insert(patient("  ", "Asha")).unwrap_err();
        assert!(matches!(err, ClinicError::ValidationMissing("email")));
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn unreadable_entry_survives_registration() {
        let mut store = JsonStore::new(MemoryBackend::default());
        store
            .backend_mut()
            .set_item(
                KEY_PATIENTS,
                r#"[{"email":"old@example.com","password":"pw","firstName":"Old"},{"email":42}]"#,
            )
            .unwrap();

        let mut repo = PatientRepository::new(&mut store);
        repo.insert(patient("p@example.com", "Asha")).unwrap();
        let err = repo.insert(patient("old@example.com", "Again")).unwrap_err();
        assert!(matches!(err, ClinicError::DuplicateEmail(_)));
        assert_eq!(repo.list().unwrap().len(), 2);

        let raw = store.backend_mut().get_item(KEY_PATIENTS).unwrap().unwrap();
        assert!(raw.contains("{\"email\":42}"));
    }

    #[test]
    fn stored_json_uses_camel_case_fields() {
        let mut store = JsonStore::new(MemoryBackend::default());
        PatientRepository::new(&mut store)
            .insert(patient("p@example.com", "Asha"))
            .unwrap();

        let raw = store.backend_mut().get_item(KEY_PATIENTS).unwrap().unwrap();
        assert!(raw.contains("\"firstName\":\"Asha\""));
        assert!(raw.contains("\"lastName\":\"\""));
    }
}

use crate::{
    error::ClinicResult,
    models::appointments::Appointment,
    storage::{JsonStore, StorageBackend, KEY_APPOINTMENTS},
};

pub struct AppointmentRepository<'s, B> {
    store: &'s mut JsonStore<B>,
}

impl<'s, B: StorageBackend> AppointmentRepository<'s, B> {
    pub fn new(store: &'s mut JsonStore<B>) -> Self {
        Self { store }
    }

    pub fn list(&mut self) -> ClinicResult<Vec<Appointment>> {
        Ok(self.store.load_list(KEY_APPOINTMENTS)?)
    }

    pub fn find_by_id(&mut self, id: &str) -> ClinicResult<Option<Appointment>> {
        Ok(self.list()?.into_iter().find(|a| a.id == id))
    }

    pub fn list_for_patient(&mut self, email: &str) -> ClinicResult<Vec<Appointment>> {
        let mut appointments = self.list()?;
        appointments.retain(|a| a.patient_email == email);
        Ok(appointments)
    }

    pub fn list_for_doctor(&mut self, email: &str) -> ClinicResult<Vec<Appointment>> {
        let mut appointments = self.list()?;
        appointments.retain(|a| a.doctor_email == email);
        Ok(appointments)
    }

    pub fn next_id(&mut self) -> ClinicResult<String> {
        let appointments = self.list()?;
        Ok(crate::utils::next_id(
            "a",
            appointments.iter().map(|a| a.id.as_str()),
        ))
    }

    /// Appends without checking the doctor; the booking flow does that.
    pub fn insert(&mut self, appointment: Appointment) -> ClinicResult<()> {
        appointment.validate()?;
        self.store.push(KEY_APPOINTMENTS, &appointment)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn appointment(id: &str, patient: &str, doctor: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            patient_email: patient.to_string(),
            doctor_email: doctor.to_string(),
            doctor_name: "Dr. X".to_string(),
            fee: 100.0,
            date: "2024-05-01".to_string(),
            time: "10:00".to_string(),
        }
    }

    #[test]
    fn filters_keep_insertion_order() {
        let mut store = JsonStore::new(MemoryBackend::default());
        let mut repo = AppointmentRepository::new(&mut store);
        repo.insert(appointment("a1", "p@example.com", "doc1@example.com")).unwrap();
        repo.insert(appointment("a2", "q@example.com", "doc1@example.com")).unwrap();
        repo.insert(appointment("a3", "p@example.com", "doc2@example.com")).unwrap();

        let ids = |list: Vec<Appointment>| list.into_iter().map(|a| a.id).collect::<Vec<_>>();
        assert_eq!(ids(repo.list_for_patient("p@example.com").unwrap()), vec!["a1", "a3"]);
        assert_eq!(ids(repo.list_for_doctor("doc1@example.com").unwrap()), vec!["a1", "a2"]);
        assert_eq!(ids(repo.list().unwrap()), vec!["a1", "a2", "a3"]);
        assert!(repo.list_for_doctor("nobody@example.com").unwrap().is_empty());
    }

    #[test]
    fn missing_date_is_rejected() {
        let mut store = JsonStore::new(MemoryBackend::default());
        let mut repo = AppointmentRepository::new(&mut store);
        let mut incomplete = appointment("a1", "p@example.com", "doc1@example.com");
        incomplete.date = String::new();

        assert!(repo.insert(incomplete).is_err());
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn unreadable_entry_does_not_hide_or_lose_the_others() {
        let mut store = JsonStore::new(MemoryBackend::default());
        let mut first = serde_json::to_value(appointment("a1", "p@example.com", "doc1@example.com"))
            .unwrap();
        first["fee"] = serde_json::json!(450.75);
        let raw = serde_json::json!([first, {"id": "a0", "fee": "free"}]).to_string();
        store.backend_mut().set_item(KEY_APPOINTMENTS, &raw).unwrap();

        let mut repo = AppointmentRepository::new(&mut store);
        assert_eq!(repo.list().unwrap()[0].fee, 450.75);
        repo.insert(appointment("a2", "p@example.com", "doc1@example.com")).unwrap();

        let ids: Vec<String> = repo.list().unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
        let raw = store.backend_mut().get_item(KEY_APPOINTMENTS).unwrap().unwrap();
        assert!(raw.contains("\"free\""));
    }

    #[test]
    fn find_by_id_returns_the_record() {
        let mut store = JsonStore::new(MemoryBackend::default());
        let mut repo = AppointmentRepository::new(&mut store);
        repo.insert(appointment("a7", "p@example.com", "doc1@example.com")).unwrap();

        assert_eq!(repo.find_by_id("a7").unwrap().unwrap().fee, 100.0);
        assert!(repo.find_by_id("a8").unwrap().is_none());
    }
}

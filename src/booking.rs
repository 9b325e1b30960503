use crate::{
    error::{ClinicError, ClinicResult},
    models::{appointments::Appointment, require_field},
    repository::{AppointmentRepository, DoctorRepository},
    storage::{JsonStore, StorageBackend},
};

/// Books `patient_email` with the doctor at `doctor_email`.
///
/// The doctor's name and fee are copied into the appointment as they are
/// right now.
pub fn book<B: StorageBackend>(
    store: &mut JsonStore<B>,
    patient_email: &str,
    doctor_email: &str,
    date: &str,
    time: &str,
) -> ClinicResult<Appointment> {
    let doctor = DoctorRepository::new(&mut *store)
        .find_by_email(doctor_email)?
        .ok_or(ClinicError::ValidationMissing("doctor"))?;
    require_field(date, "date")?;
    require_field(time, "time")?;

    let mut appointments = AppointmentRepository::new(store);
    let appointment = Appointment {
        id: appointments.next_id()?,
        patient_email: patient_email.to_string(),
        doctor_email: doctor.email,
        doctor_name: doctor.name,
        fee: doctor.fee,
        date: date.to_string(),
        time: time.to_string(),
    };
    appointments.insert(appointment.clone())?;

    tracing::info!(
        id = %appointment.id,
        patient = patient_email,
        doctor = %appointment.doctor_email,
        "Appointment booked"
    );
    Ok(appointment)
}

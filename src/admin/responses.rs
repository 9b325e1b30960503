use serde::Serialize;

use crate::{
    models::patients::Patient,
    protocol::{AppointmentItem, DoctorItem},
};

#[derive(Default, Serialize)]
pub struct AddDoctorResponse {
    pub success: bool,
    pub err: String,
    pub doctor: DoctorItem,
}

#[derive(Default, Serialize)]
pub struct PatientItem {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub gender: String,
}

impl From<Patient> for PatientItem {
    fn from(patient: Patient) -> Self {
        Self {
            email: patient.email,
            first_name: patient.first_name,
            last_name: patient.last_name,
            contact: patient.contact,
            gender: patient.gender,
        }
    }
}

#[derive(Default, Serialize)]
pub struct OverviewResponse {
    pub success: bool,
    pub err: String,
    pub doctors: Vec<DoctorItem>,
    pub patients: Vec<PatientItem>,
    pub appointments: Vec<AppointmentItem>,
}

crate::impl_err_response! {
    AddDoctorResponse,
    OverviewResponse,
}

use serde::Serialize;

use crate::models::{appointments::Appointment, doctors::Doctor};

#[derive(Default, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub err: String,
}

impl SimpleResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            err: "".to_string(),
        }
    }
}

#[derive(Default, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub err: String,
    pub login_token: String,
    pub name: String,
}

/// A doctor as shown to other users. Never carries the password.
#[derive(Debug, Default, Serialize)]
pub struct DoctorItem {
    pub id: String,
    pub name: String,
    pub email: String,
    pub fee: f64,
    pub specialization: String,
}

impl From<Doctor> for DoctorItem {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            email: doctor.email,
            fee: doctor.fee,
            specialization: doctor.specialization,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct AppointmentItem {
    pub id: String,
    pub patient_email: String,
    pub doctor_email: String,
    pub doctor_name: String,
    pub fee: f64,
    pub date: String,
    pub time: String,
}

impl From<Appointment> for AppointmentItem {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            patient_email: appointment.patient_email,
            doctor_email: appointment.doctor_email,
            doctor_name: appointment.doctor_name,
            fee: appointment.fee,
            date: appointment.date,
            time: appointment.time,
        }
    }
}

#[derive(Default, Serialize)]
pub struct AppointmentsResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<AppointmentItem>,
}

#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err<S: ToString>(err: S) -> Self {
                    Self {
                        success: false,
                        err: err.to_string(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

impl_err_response! {
    SimpleResponse,
    LoginResponse,
    AppointmentsResponse,
}

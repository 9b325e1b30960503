use serde::Serialize;

use crate::protocol::{AppointmentItem, DoctorItem};

#[derive(Default, Serialize)]
pub struct DoctorsResponse {
    pub success: bool,
    pub err: String,
    pub doctors: Vec<DoctorItem>,
}

#[derive(Default, Serialize)]
pub struct BookResponse {
    pub success: bool,
    pub err: String,
    pub appointment: AppointmentItem,
}

crate::impl_err_response! {
    DoctorsResponse,
    BookResponse,
}

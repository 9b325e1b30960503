//! Typed accessors over the record collections.
//!
//! Each collection is one JSON array in one storage slot. Repositories
//! borrow the store for the duration of a call sequence, so callers decide
//! the transaction boundary.

pub mod appointments;
pub mod doctors;
pub mod messages;
pub mod patients;

pub use appointments::AppointmentRepository;
pub use doctors::DoctorRepository;
pub use messages::MessageRepository;
pub use patients::PatientRepository;

pub mod appointment;
pub mod doctor;
pub mod invoice;
pub mod prescription;
pub mod record;
pub mod service;
pub mod session;
pub mod user;

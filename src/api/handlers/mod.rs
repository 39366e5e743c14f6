pub mod appointment;
pub mod auth;
pub mod dashboard;
pub mod doctor;
pub mod health;
pub mod listing;

use crate::domain::models::{
    user::{User, NewUser}, session::SessionRecord, doctor::{Doctor, NewDoctor, DoctorFilter},
    appointment::{Appointment, NewAppointment, AppointmentDetails}, service::{Service, NewService},
    record::{MedicalRecord, NewMedicalRecord}, prescription::{Prescription, NewPrescription},
    invoice::{Invoice, NewInvoice},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &SessionRecord) -> Result<(), AppError>;
    async fn find(&self, token_hash: &str) -> Result<Option<SessionRecord>, AppError>;
    async fn delete(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_for_user(&self, user_id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait DoctorRepository: Send + Sync {
    async fn create(&self, doctor: &NewDoctor) -> Result<Doctor, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Doctor>, AppError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Doctor>, AppError>;
    async fn list(&self, limit: Option<i64>) -> Result<Vec<Doctor>, AppError>;
    async fn search(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>, AppError>;
    async fn list_specializations(&self) -> Result<Vec<String>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn create(&self, appointment: &NewAppointment) -> Result<Appointment, AppError>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<AppointmentDetails>, AppError>;
    async fn find_first_for_user(&self, user_id: i64) -> Result<Option<AppointmentDetails>, AppError>;
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: &NewService) -> Result<Service, AppError>;
    async fn list(&self) -> Result<Vec<Service>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait MedicalRecordRepository: Send + Sync {
    async fn create(&self, record: &NewMedicalRecord) -> Result<MedicalRecord, AppError>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<MedicalRecord>, AppError>;
    async fn count_by_user(&self, user_id: i64) -> Result<i64, AppError>;
}

#[async_trait]
pub trait PrescriptionRepository: Send + Sync {
    async fn create(&self, prescription: &NewPrescription) -> Result<Prescription, AppError>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Prescription>, AppError>;
}

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn create(&self, invoice: &NewInvoice) -> Result<Invoice, AppError>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Invoice>, AppError>;
}

use std::sync::Arc;
use crate::domain::ports::{
    UserRepository, DoctorRepository, AppointmentRepository,
    ServiceRepository, MedicalRecordRepository, PrescriptionRepository, InvoiceRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub doctor_repo: Arc<dyn DoctorRepository>,
    pub appointment_repo: Arc<dyn AppointmentRepository>,
    pub service_repo: Arc<dyn ServiceRepository>,
    pub record_repo: Arc<dyn MedicalRecordRepository>,
    pub prescription_repo: Arc<dyn PrescriptionRepository>,
    pub invoice_repo: Arc<dyn InvoiceRepository>,
    pub auth_service: Arc<AuthService>,
}

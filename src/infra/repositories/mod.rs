pub mod sqlite_user_repo;
pub mod sqlite_session_repo;
pub mod sqlite_doctor_repo;
pub mod sqlite_appointment_repo;
pub mod sqlite_service_repo;
pub mod sqlite_record_repo;
pub mod sqlite_prescription_repo;
pub mod sqlite_invoice_repo;

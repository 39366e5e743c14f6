use serde::Serialize;
use chrono::{DateTime, Utc};

use crate::api::flash::Flash;
use crate::domain::models::{
    appointment::AppointmentDetails,
    doctor::Doctor,
    user::User,
};

#[derive(Serialize)]
pub struct LoginPage {
    pub flash: Option<Flash>,
}

#[derive(Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct DashboardView {
    pub user: UserProfile,
    pub doctors: Vec<Doctor>,
    pub next_appointment: Option<AppointmentDetails>,
}

#[derive(Serialize)]
pub struct DoctorDirectoryView {
    pub doctors: Vec<Doctor>,
    pub specializations: Vec<String>,
    pub q: String,
    pub spec: String,
}

#[derive(Serialize)]
pub struct DoctorChoice {
    pub id: i64,
    pub label: String,
}

impl From<&Doctor> for DoctorChoice {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id,
            label: doctor.choice_label(),
        }
    }
}

#[derive(Serialize)]
pub struct AppointmentsView {
    pub flash: Option<Flash>,
    pub doctor_choices: Vec<DoctorChoice>,
    pub appointments: Vec<AppointmentDetails>,
}

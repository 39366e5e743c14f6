use serde::Deserialize;

// Form fields are optional so that missing input surfaces as a validation
// message instead of an extractor rejection.

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm: Option<String>,
}

#[derive(Deserialize)]
pub struct AppointmentForm {
    pub doctor_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub reason: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct DoctorSearchQuery {
    pub q: Option<String>,
    pub spec: Option<String>,
}

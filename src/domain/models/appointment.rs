use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Appointment {
    pub id: i64,
    pub user_id: i64,
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: Option<String>,
}

pub struct NewAppointment {
    pub user_id: i64,
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: Option<String>,
}

/// Appointment row joined with the doctor it was booked with.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct AppointmentDetails {
    pub id: i64,
    pub doctor_id: i64,
    pub doctor_name: String,
    pub specialization: String,
    pub hospital: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: Option<String>,
}

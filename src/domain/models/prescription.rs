use serde::{Deserialize, Serialize};
use chrono::{Local, NaiveDate};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Prescription {
    pub id: i64,
    pub user_id: i64,
    pub doctor_name: String,
    pub medication: String,
    pub dosage: String,
    pub instructions: String,
    pub issued_on: NaiveDate,
}

pub struct NewPrescription {
    pub user_id: i64,
    pub doctor_name: String,
    pub medication: String,
    pub dosage: String,
    pub instructions: String,
    pub issued_on: NaiveDate,
}

impl NewPrescription {
    pub fn new(user_id: i64, doctor_name: &str, medication: &str, dosage: &str, instructions: &str) -> Self {
        Self {
            user_id,
            doctor_name: doctor_name.to_string(),
            medication: medication.to_string(),
            dosage: dosage.to_string(),
            instructions: instructions.to_string(),
            issued_on: Local::now().date_naive(),
        }
    }
}

use serde::{Deserialize, Serialize};
use chrono::{Local, NaiveDate};
use sqlx::FromRow;
use std::fmt;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvoiceStatus {
    #[default]
    Unpaid,
    Paid,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceStatus::Unpaid => write!(f, "Unpaid"),
            InvoiceStatus::Paid => write!(f, "Paid"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Invoice {
    pub id: i64,
    pub user_id: i64,
    pub item: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub issued_on: NaiveDate,
}

pub struct NewInvoice {
    pub user_id: i64,
    pub item: String,
    pub amount: u32,
    pub status: InvoiceStatus,
    pub issued_on: NaiveDate,
}

impl NewInvoice {
    pub fn new(user_id: i64, item: &str, amount: u32) -> Self {
        Self {
            user_id,
            item: item.to_string(),
            amount,
            status: InvoiceStatus::default(),
            issued_on: Local::now().date_naive(),
        }
    }

    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }
}

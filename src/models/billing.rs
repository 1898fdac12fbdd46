use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A billed charge against a patient. Amounts are stored as given;
/// two-decimal rounding is a display concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billing {
    pub id: u64,
    pub patient_id: u64,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
}

/// Create payload; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBilling {
    pub patient_id: u64,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
}

impl NewBilling {
    pub fn with_id(self, id: u64) -> Billing {
        Billing {
            id,
            patient_id: self.patient_id,
            amount: self.amount,
            description: self.description,
            date: self.date,
        }
    }
}

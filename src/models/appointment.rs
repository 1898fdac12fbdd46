use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled slot. `doctorId` and `patientId` are not foreign-key
/// checked; consumers render dangling references as "Unknown".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u64,
    pub doctor_id: u64,
    pub patient_id: u64,
    pub date: NaiveDate,
    /// Time of day as `HH:MM`, the form the scheduling page submits.
    pub time: String,
}

/// Create payload; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub doctor_id: u64,
    pub patient_id: u64,
    pub date: NaiveDate,
    pub time: String,
}

impl NewAppointment {
    pub fn with_id(self, id: u64) -> Appointment {
        Appointment {
            id,
            doctor_id: self.doctor_id,
            patient_id: self.patient_id,
            date: self.date,
            time: self.time,
        }
    }
}

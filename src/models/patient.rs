use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub medical_record: String,
}

/// Create payload; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub phone: String,
    pub medical_record: String,
}

impl NewPatient {
    pub fn with_id(self, id: u64) -> Patient {
        Patient {
            id,
            name: self.name,
            phone: self.phone,
            medical_record: self.medical_record,
        }
    }
}

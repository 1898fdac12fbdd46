use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: u64,
    pub name: String,
    pub specialization: String,
    /// Derived back-reference. The store keeps this equal to the set of
    /// staff ids whose `assignedDoctorId` points here; it is not
    /// independently authoritative.
    #[serde(default)]
    pub assigned_staff: Vec<u64>,
}

/// Create payload; the store assigns the id and starts the
/// back-reference list empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
}

impl NewDoctor {
    pub fn with_id(self, id: u64) -> Doctor {
        Doctor {
            id,
            name: self.name,
            specialization: self.specialization,
            assigned_staff: Vec::new(),
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: u64,
    pub name: String,
    /// Authoritative half of the doctor and staff relationship.
    /// `null` when unassigned.
    pub assigned_doctor_id: Option<u64>,
}

/// Create payload; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStaff {
    pub name: String,
    #[serde(default)]
    pub assigned_doctor_id: Option<u64>,
}

impl NewStaff {
    pub fn with_id(self, id: u64) -> Staff {
        Staff {
            id,
            name: self.name,
            assigned_doctor_id: self.assigned_doctor_id,
        }
    }
}

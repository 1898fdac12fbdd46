//! The persisted document: five entity collections plus the user list,
//! loaded wholesale and saved wholesale.

use serde::{Deserialize, Serialize};

use crate::models::{Appointment, Billing, Doctor, Patient, Staff, User};

/// Collection records expose their numeric id for generic plumbing
/// (id allocation, lookup by id).
pub trait Keyed {
    fn id(&self) -> u64;
}

macro_rules! keyed {
    ($($entity:ty),+) => {
        $(impl Keyed for $entity {
            fn id(&self) -> u64 {
                self.id
            }
        })+
    };
}

keyed!(Patient, Doctor, Staff, Appointment, Billing);

/// The whole persisted state. Missing collections deserialize as empty,
/// so a hand-seeded data file only needs the sections it uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub billing: Vec<Billing>,
    #[serde(default)]
    pub staff: Vec<Staff>,
}

/// Next id for a collection: one past the current maximum, `1` when the
/// collection is empty. Not safe under concurrent writers; the store
/// serializes all mutations behind one mutex.
pub fn next_id<T: Keyed>(records: &[T]) -> u64 {
    records.iter().map(Keyed::id).max().map_or(1, |max| max + 1)
}

impl Document {
    pub fn doctor_mut(&mut self, id: u64) -> Option<&mut Doctor> {
        self.doctors.iter_mut().find(|d| d.id == id)
    }

    /// Record `staff_id` in the doctor's back-reference list. A missing
    /// doctor is skipped; a duplicate entry is never inserted.
    pub fn attach_staff(&mut self, doctor_id: u64, staff_id: u64) {
        if let Some(doctor) = self.doctor_mut(doctor_id) {
            if !doctor.assigned_staff.contains(&staff_id) {
                doctor.assigned_staff.push(staff_id);
            }
        }
    }

    /// Drop `staff_id` from the doctor's back-reference list.
    pub fn detach_staff(&mut self, doctor_id: u64, staff_id: u64) {
        if let Some(doctor) = self.doctor_mut(doctor_id) {
            doctor.assigned_staff.retain(|&id| id != staff_id);
        }
    }
}

//! Doctor and staff back-reference consistency.
//!
//! `Staff::assigned_doctor_id` is the source of truth; every doctor's
//! `assigned_staff` list must equal the set of staff ids pointing at it.
//! The repositories maintain that equality on each mutation, but a
//! hand-edited or drifted data file can violate it. `check` reports the
//! violations, `repair` rebuilds the derived lists from the
//! authoritative fields.

use std::collections::HashSet;

use serde::Serialize;

use crate::store::Document;

/// A single consistency issue detected by the checker.
#[derive(Debug, Clone, Serialize)]
pub struct ConsistencyIssue {
    pub category: String,
    pub description: String,
    pub doctor_id: Option<u64>,
    pub staff_id: Option<u64>,
}

/// Result of a consistency check over the doctor and staff collections.
#[derive(Debug, Clone, Serialize)]
pub struct ConsistencyReport {
    pub issues: Vec<ConsistencyIssue>,
    pub doctors_checked: usize,
    pub staff_checked: usize,
}

/// The staff ids assigned to `doctor_id`, in staff-collection order.
fn expected_staff(document: &Document, doctor_id: u64) -> Vec<u64> {
    document
        .staff
        .iter()
        .filter(|s| s.assigned_doctor_id == Some(doctor_id))
        .map(|s| s.id)
        .collect()
}

/// Detect back-reference drift without modifying anything.
pub fn check(document: &Document) -> ConsistencyReport {
    let mut issues = Vec::new();

    for doctor in &document.doctors {
        let expected: HashSet<u64> = expected_staff(document, doctor.id).into_iter().collect();
        let mut seen = HashSet::new();

        for &staff_id in &doctor.assigned_staff {
            if !seen.insert(staff_id) {
                issues.push(ConsistencyIssue {
                    category: "duplicate_back_reference".into(),
                    description: format!("staff {staff_id} listed twice"),
                    doctor_id: Some(doctor.id),
                    staff_id: Some(staff_id),
                });
            }
            if !expected.contains(&staff_id) {
                issues.push(ConsistencyIssue {
                    category: "stale_back_reference".into(),
                    description: format!("staff {staff_id} is not assigned to this doctor"),
                    doctor_id: Some(doctor.id),
                    staff_id: Some(staff_id),
                });
            }
        }

        for staff_id in expected {
            if !doctor.assigned_staff.contains(&staff_id) {
                issues.push(ConsistencyIssue {
                    category: "missing_back_reference".into(),
                    description: format!("assigned staff {staff_id} is not listed"),
                    doctor_id: Some(doctor.id),
                    staff_id: Some(staff_id),
                });
            }
        }
    }

    for staff in &document.staff {
        if let Some(doctor_id) = staff.assigned_doctor_id {
            if !document.doctors.iter().any(|d| d.id == doctor_id) {
                issues.push(ConsistencyIssue {
                    category: "missing_doctor".into(),
                    description: format!("assigned doctor {doctor_id} does not exist"),
                    doctor_id: Some(doctor_id),
                    staff_id: Some(staff.id),
                });
            }
        }
    }

    ConsistencyReport {
        issues,
        doctors_checked: document.doctors.len(),
        staff_checked: document.staff.len(),
    }
}

/// Repair drift in place: null staff assignments that point at absent
/// doctors, then rebuild every doctor's list from the authoritative
/// fields. Returns the number of records changed.
pub fn repair(document: &mut Document) -> usize {
    let mut repaired = 0;

    let doctor_ids: HashSet<u64> = document.doctors.iter().map(|d| d.id).collect();
    for staff in &mut document.staff {
        if let Some(doctor_id) = staff.assigned_doctor_id {
            if !doctor_ids.contains(&doctor_id) {
                staff.assigned_doctor_id = None;
                tracing::info!(staff_id = staff.id, doctor_id, "cleared dangling staff assignment");
                repaired += 1;
            }
        }
    }

    let rebuilt: Vec<(u64, Vec<u64>)> = document
        .doctors
        .iter()
        .map(|d| (d.id, expected_staff(document, d.id)))
        .collect();
    for (doctor_id, expected) in rebuilt {
        if let Some(doctor) = document.doctor_mut(doctor_id) {
            if doctor.assigned_staff != expected {
                tracing::info!(doctor_id, "rebuilt assigned staff list");
                doctor.assigned_staff = expected;
                repaired += 1;
            }
        }
    }

    repaired
}

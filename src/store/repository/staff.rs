//! Staff collection CRUD.
//!
//! `assigned_doctor_id` is the authoritative half of the doctor and
//! staff relationship. Every mutation here restores the derived
//! `Doctor::assigned_staff` list before the document is saved: detach
//! from the prior assignment, merge, attach under the merged one.

use serde_json::{Map, Value};

use crate::models::{NewStaff, Staff};
use crate::store::merge::shallow_merge;
use crate::store::{document, Document, StoreError};

pub fn list(document: &Document) -> Vec<Staff> {
    document.staff.clone()
}

/// Append a new staff member under the next free id and record the
/// back-reference on the assigned doctor, if that doctor exists.
pub fn create(document: &mut Document, payload: NewStaff) -> Staff {
    let id = document::next_id(&document.staff);
    let staff = payload.with_id(id);
    document.staff.push(staff.clone());
    if let Some(doctor_id) = staff.assigned_doctor_id {
        document.attach_staff(doctor_id, id);
    }
    staff
}

/// Shallow-merge `patch` into the staff member with `id`, moving the
/// doctor back-reference from the prior assignment to the merged one.
/// A patch that omits `assignedDoctorId` keeps the current assignment.
pub fn update(
    document: &mut Document,
    id: u64,
    patch: Map<String, Value>,
) -> Result<Staff, StoreError> {
    let index = document
        .staff
        .iter()
        .position(|s| s.id == id)
        .ok_or(StoreError::NotFound { entity: "staff", id })?;

    let previous = document.staff[index].clone();
    let merged: Staff =
        shallow_merge(&previous, patch).map_err(StoreError::InvalidPayload)?;

    if let Some(old_doctor) = previous.assigned_doctor_id {
        document.detach_staff(old_doctor, id);
    }
    if let Some(new_doctor) = merged.assigned_doctor_id {
        document.attach_staff(new_doctor, id);
    }

    document.staff[index] = merged.clone();
    Ok(merged)
}

/// Remove the staff member with `id`, dropping it from its doctor's
/// back-reference list first. Removing an absent id is not an error.
pub fn delete(document: &mut Document, id: u64) {
    let assigned = document
        .staff
        .iter()
        .find(|s| s.id == id)
        .and_then(|s| s.assigned_doctor_id);
    if let Some(doctor_id) = assigned {
        document.detach_staff(doctor_id, id);
    }
    document.staff.retain(|s| s.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewDoctor;
    use crate::store::repository::doctor;

    fn seed_doctors(document: &mut Document, count: usize) {
        for i in 0..count {
            doctor::create(
                document,
                NewDoctor {
                    name: format!("Doctor {}", i + 1),
                    specialization: "General".into(),
                },
            );
        }
    }

    fn assigned(name: &str, doctor_id: u64) -> NewStaff {
        NewStaff {
            name: name.into(),
            assigned_doctor_id: Some(doctor_id),
        }
    }

    #[test]
    fn create_attaches_to_the_assigned_doctor() {
        let mut document = Document::default();
        seed_doctors(&mut document, 1);
        let created = create(&mut document, assigned("Ana", 1));
        assert_eq!(created.id, 1);
        assert_eq!(document.doctors[0].assigned_staff, vec![1]);
    }

    #[test]
    fn create_pointing_at_a_missing_doctor_still_stores_the_reference() {
        let mut document = Document::default();
        let created = create(&mut document, assigned("Ana", 42));
        assert_eq!(created.assigned_doctor_id, Some(42));
        assert!(document.doctors.is_empty());
    }

    #[test]
    fn reassignment_moves_the_back_reference() {
        let mut document = Document::default();
        seed_doctors(&mut document, 2);
        create(&mut document, assigned("Ana", 1));

        let patch = serde_json::from_str(r#"{"assignedDoctorId":2}"#).unwrap();
        update(&mut document, 1, patch).unwrap();

        assert!(document.doctors[0].assigned_staff.is_empty());
        assert_eq!(document.doctors[1].assigned_staff, vec![1]);
    }

    #[test]
    fn repeated_identical_updates_do_not_duplicate() {
        let mut document = Document::default();
        seed_doctors(&mut document, 2);
        create(&mut document, assigned("Ana", 1));

        for _ in 0..3 {
            let patch = serde_json::from_str(r#"{"assignedDoctorId":2}"#).unwrap();
            update(&mut document, 1, patch).unwrap();
        }

        assert_eq!(document.doctors[1].assigned_staff, vec![1]);
    }

    #[test]
    fn name_only_patch_keeps_the_assignment() {
        let mut document = Document::default();
        seed_doctors(&mut document, 1);
        create(&mut document, assigned("Ana", 1));

        let patch = serde_json::from_str(r#"{"name":"Ana Maria"}"#).unwrap();
        let updated = update(&mut document, 1, patch).unwrap();

        assert_eq!(updated.assigned_doctor_id, Some(1));
        assert_eq!(document.doctors[0].assigned_staff, vec![1]);
    }

    #[test]
    fn null_patch_detaches_from_the_doctor() {
        let mut document = Document::default();
        seed_doctors(&mut document, 1);
        create(&mut document, assigned("Ana", 1));

        let patch = serde_json::from_str(r#"{"assignedDoctorId":null}"#).unwrap();
        let updated = update(&mut document, 1, patch).unwrap();

        assert_eq!(updated.assigned_doctor_id, None);
        assert!(document.doctors[0].assigned_staff.is_empty());
    }

    #[test]
    fn delete_removes_the_back_reference() {
        let mut document = Document::default();
        seed_doctors(&mut document, 1);
        create(&mut document, assigned("Ana", 1));
        create(&mut document, assigned("Bea", 1));

        delete(&mut document, 1);

        assert_eq!(document.doctors[0].assigned_staff, vec![2]);
        assert_eq!(document.staff.len(), 1);
    }

    #[test]
    fn delete_of_a_missing_id_changes_nothing() {
        let mut document = Document::default();
        seed_doctors(&mut document, 1);
        create(&mut document, assigned("Ana", 1));

        delete(&mut document, 42);

        assert_eq!(document.staff.len(), 1);
        assert_eq!(document.doctors[0].assigned_staff, vec![1]);
    }
}

//! Doctor collection CRUD.
//!
//! `assigned_staff` is store-managed: create starts it empty and the
//! staff repository maintains it afterwards. Update passes patches
//! through unreconciled; callers are expected not to hand-edit the list.

use serde_json::{Map, Value};

use crate::models::{Doctor, NewDoctor};
use crate::store::merge::shallow_merge;
use crate::store::{document, Document, StoreError};

pub fn list(document: &Document) -> Vec<Doctor> {
    document.doctors.clone()
}

/// Append a new doctor under the next free id, with no assigned staff.
pub fn create(document: &mut Document, payload: NewDoctor) -> Doctor {
    let id = document::next_id(&document.doctors);
    let doctor = payload.with_id(id);
    document.doctors.push(doctor.clone());
    doctor
}

/// Shallow-merge `patch` into the doctor with `id`.
pub fn update(
    document: &mut Document,
    id: u64,
    patch: Map<String, Value>,
) -> Result<Doctor, StoreError> {
    let index = document
        .doctors
        .iter()
        .position(|d| d.id == id)
        .ok_or(StoreError::NotFound {
            entity: "doctor",
            id,
        })?;
    let merged = shallow_merge(&document.doctors[index], patch)
        .map_err(StoreError::InvalidPayload)?;
    document.doctors[index] = merged.clone();
    Ok(merged)
}

/// Remove the doctor with `id`. Staff assigned to it keep their records
/// but lose the assignment; appointments referencing it are left as-is.
/// Removing an absent id is not an error.
pub fn delete(document: &mut Document, id: u64) {
    for staff in &mut document.staff {
        if staff.assigned_doctor_id == Some(id) {
            staff.assigned_doctor_id = None;
        }
    }
    document.doctors.retain(|d| d.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewStaff;
    use crate::store::repository::staff;

    fn new_doctor(name: &str) -> NewDoctor {
        NewDoctor {
            name: name.into(),
            specialization: "Cardiology".into(),
        }
    }

    #[test]
    fn create_starts_with_no_assigned_staff() {
        let mut document = Document::default();
        let created = create(&mut document, new_doctor("Dr. Chen"));
        assert_eq!(created.id, 1);
        assert!(created.assigned_staff.is_empty());
    }

    #[test]
    fn delete_unassigns_every_staff_member() {
        let mut document = Document::default();
        create(&mut document, new_doctor("Dr. Chen"));
        staff::create(
            &mut document,
            NewStaff {
                name: "Ana".into(),
                assigned_doctor_id: Some(1),
            },
        );
        staff::create(
            &mut document,
            NewStaff {
                name: "Bea".into(),
                assigned_doctor_id: Some(1),
            },
        );
        assert_eq!(document.doctors[0].assigned_staff, vec![1, 2]);

        delete(&mut document, 1);

        assert!(document.doctors.is_empty());
        assert_eq!(document.staff.len(), 2);
        assert!(document
            .staff
            .iter()
            .all(|s| s.assigned_doctor_id.is_none()));
    }

    #[test]
    fn delete_leaves_other_doctors_staff_alone() {
        let mut document = Document::default();
        create(&mut document, new_doctor("Dr. Chen"));
        create(&mut document, new_doctor("Dr. Diaz"));
        staff::create(
            &mut document,
            NewStaff {
                name: "Ana".into(),
                assigned_doctor_id: Some(2),
            },
        );

        delete(&mut document, 1);

        assert_eq!(document.staff[0].assigned_doctor_id, Some(2));
        assert_eq!(document.doctors[0].assigned_staff, vec![1]);
    }

    #[test]
    fn update_merges_name_only() {
        let mut document = Document::default();
        create(&mut document, new_doctor("Dr. Chen"));
        let patch = serde_json::from_str(r#"{"name":"Dr. Chen-Lee"}"#).unwrap();
        let updated = update(&mut document, 1, patch).unwrap();
        assert_eq!(updated.name, "Dr. Chen-Lee");
        assert_eq!(updated.specialization, "Cardiology");
    }
}

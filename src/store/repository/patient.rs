//! Patient collection CRUD.

use serde_json::{Map, Value};

use crate::models::{NewPatient, Patient};
use crate::store::merge::shallow_merge;
use crate::store::{document, Document, StoreError};

pub fn list(document: &Document) -> Vec<Patient> {
    document.patients.clone()
}

/// Append a new patient under the next free id.
pub fn create(document: &mut Document, payload: NewPatient) -> Patient {
    let id = document::next_id(&document.patients);
    let patient = payload.with_id(id);
    document.patients.push(patient.clone());
    patient
}

/// Shallow-merge `patch` into the patient with `id`.
pub fn update(
    document: &mut Document,
    id: u64,
    patch: Map<String, Value>,
) -> Result<Patient, StoreError> {
    let index = document
        .patients
        .iter()
        .position(|p| p.id == id)
        .ok_or(StoreError::NotFound {
            entity: "patient",
            id,
        })?;
    let merged = shallow_merge(&document.patients[index], patch)
        .map_err(StoreError::InvalidPayload)?;
    document.patients[index] = merged.clone();
    Ok(merged)
}

/// Remove the patient with `id`. Removing an absent id is not an error.
pub fn delete(document: &mut Document, id: u64) {
    document.patients.retain(|p| p.id != id);
}

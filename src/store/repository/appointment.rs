//! Appointment collection CRUD.
//!
//! No uniqueness or conflict checking across overlapping slots, and no
//! foreign-key enforcement on `doctorId`/`patientId`.

use serde_json::{Map, Value};

use crate::models::{Appointment, NewAppointment};
use crate::store::merge::shallow_merge;
use crate::store::{document, Document, StoreError};

pub fn list(document: &Document) -> Vec<Appointment> {
    document.appointments.clone()
}

/// Append a new appointment under the next free id.
pub fn create(document: &mut Document, payload: NewAppointment) -> Appointment {
    let id = document::next_id(&document.appointments);
    let appointment = payload.with_id(id);
    document.appointments.push(appointment.clone());
    appointment
}

/// Shallow-merge `patch` into the appointment with `id`.
pub fn update(
    document: &mut Document,
    id: u64,
    patch: Map<String, Value>,
) -> Result<Appointment, StoreError> {
    let index = document
        .appointments
        .iter()
        .position(|a| a.id == id)
        .ok_or(StoreError::NotFound {
            entity: "appointment",
            id,
        })?;
    let merged = shallow_merge(&document.appointments[index], patch)
        .map_err(StoreError::InvalidPayload)?;
    document.appointments[index] = merged.clone();
    Ok(merged)
}

/// Remove the appointment with `id`. Removing an absent id is not an error.
pub fn delete(document: &mut Document, id: u64) {
    document.appointments.retain(|a| a.id != id);
}

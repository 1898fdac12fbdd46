//! Billing collection CRUD.
//!
//! No foreign-key enforcement on `patientId`; consumers render dangling
//! references as "N/A".

use serde_json::{Map, Value};

use crate::models::{Billing, NewBilling};
use crate::store::merge::shallow_merge;
use crate::store::{document, Document, StoreError};

pub fn list(document: &Document) -> Vec<Billing> {
    document.billing.clone()
}

/// Append a new billing record under the next free id.
pub fn create(document: &mut Document, payload: NewBilling) -> Billing {
    let id = document::next_id(&document.billing);
    let record = payload.with_id(id);
    document.billing.push(record.clone());
    record
}

/// Shallow-merge `patch` into the billing record with `id`.
pub fn update(
    document: &mut Document,
    id: u64,
    patch: Map<String, Value>,
) -> Result<Billing, StoreError> {
    let index = document
        .billing
        .iter()
        .position(|b| b.id == id)
        .ok_or(StoreError::NotFound {
            entity: "billing record",
            id,
        })?;
    let merged = shallow_merge(&document.billing[index], patch)
        .map_err(StoreError::InvalidPayload)?;
    document.billing[index] = merged.clone();
    Ok(merged)
}

/// Remove the billing record with `id`. Removing an absent id is not an error.
pub fn delete(document: &mut Document, id: u64) {
    document.billing.retain(|b| b.id != id);
}

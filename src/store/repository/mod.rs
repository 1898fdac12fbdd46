pub mod appointment;
pub mod billing;
pub mod doctor;
pub mod patient;
pub mod staff;

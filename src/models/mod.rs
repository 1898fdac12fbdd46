pub mod appointment;
pub mod billing;
pub mod doctor;
pub mod enums;
pub mod patient;
pub mod staff;
pub mod user;

pub use appointment::*;
pub use billing::*;
pub use doctor::*;
pub use enums::*;
pub use patient::*;
pub use staff::*;
pub use user::*;

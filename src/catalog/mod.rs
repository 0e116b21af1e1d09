//! Catalog Module
//!
//! Fixed account tier and courier tables.

pub mod account;
pub mod courier;

pub use account::{Account, AccountType, ACCOUNTS};
pub use courier::{Courier, CourierZone, Zone, COURIERS};

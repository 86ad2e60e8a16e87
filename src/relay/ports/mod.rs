//! Port contracts for the relay.

pub mod delivery;

pub use delivery::{DeliveryError, DeliveryReceipt, DeliveryResult, MessageDelivery};

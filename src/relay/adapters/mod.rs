//! Adapter implementations of the delivery port.
//!
//! - [`twilio`]: Twilio Messages API for production
//! - [`memory`]: recording adapter for tests

pub mod memory;
pub mod twilio;

pub use memory::RecordingDelivery;
pub use twilio::TwilioDelivery;

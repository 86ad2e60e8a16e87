//! Application services for relaying chat messages.

mod relay;

pub use relay::RelayService;

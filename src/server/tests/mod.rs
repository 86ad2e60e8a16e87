//! Unit tests for the relay HTTP routes.

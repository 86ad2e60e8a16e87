//! Unit tests for the relay context.

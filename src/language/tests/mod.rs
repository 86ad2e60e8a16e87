//! Unit tests for the language context.

mod adapter_tests;

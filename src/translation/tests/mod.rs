//! Unit tests for the translation context.

mod domain_tests;

//! Unit and service tests for the user subsystem.

mod domain_tests;

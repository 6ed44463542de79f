//! Unit and service tests for the live subsystem.

mod domain_tests;

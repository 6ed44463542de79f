//! Unit and service tests for the group subsystem.

mod feed_service_tests;

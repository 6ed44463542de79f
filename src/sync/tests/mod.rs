//! Unit tests for the ordered fan-out primitives.

mod ordered_group_tests;

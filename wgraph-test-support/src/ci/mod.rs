//! Environment-driven configuration shared by CI and local test runs.

pub mod property_test_profile;

//! Continuous-integration helpers shared by the property suites.

pub mod property_test_profile;

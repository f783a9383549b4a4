/// Shared resource payloads used across the test suites.
pub mod fixtures;

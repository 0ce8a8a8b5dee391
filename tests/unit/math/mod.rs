//! Unit suites for mathematical utilities

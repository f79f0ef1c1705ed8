//! Test modules for the scan cycle
//!
//! This module organizes the test suites for the scan cycle controller:
//! throttling, gating, aggregation and trigger routing.

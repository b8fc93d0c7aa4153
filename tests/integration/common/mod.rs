//! Common utilities for integration tests.
//!
//! This module provides shared test infrastructure for LocalStack-based
//! integration testing: client setup, bucket and queue fixtures.

pub mod localstack;

pub use localstack::LocalStackTestContext;

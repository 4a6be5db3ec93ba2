//! Tests for the enrichment services
//!
//! These exercise the real service implementations against a local mock
//! HTTP server and temporary files.

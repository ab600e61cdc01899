//! Integration tests for async extensions.

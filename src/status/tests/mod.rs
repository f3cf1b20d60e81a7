//! Unit tests for the status module.
//!
//! Tests cover name validation, the protected-name policy, the registry
//! rules, and service orchestration over the in-memory adapter.

//! Workspace-level integration tests for fibkit. See `tests/`.

//! Serde round-trip tests for ndbuffer live in `tests/`.

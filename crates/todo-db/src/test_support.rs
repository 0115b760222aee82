//! Shared test utilities for todo-db unit tests.

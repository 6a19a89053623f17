//! Crate-level tests: operator tables and the public `run` entry point.

//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod graph_assertions;
pub mod graph_fixtures;

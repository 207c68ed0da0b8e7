//! Shared test utilities for damage calculation tests.
//!
//! Fixture types, catalog loading and the conversions from fixture data to
//! calculator inputs. Imported by the test binaries with `mod common;`.

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

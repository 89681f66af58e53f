//! Shared test utilities for viktor integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. HTTP helpers drive the router in-process, so no port is
//! ever bound.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use client::*;
pub use fixtures::*;

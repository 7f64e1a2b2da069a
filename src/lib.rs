// src/lib.rs
//! Asset fixtures for Iroha client test suites.
//!
//! [`AssetDefinition`] renders as `name#domain` and [`Asset`] as
//! `name#domain:value`, the forms the client prints and the suites compare
//! against.
pub mod asset;
pub mod error;
pub mod fixture;
pub mod holding;

pub use asset::{Asset, AssetDefinition};
pub use error::ModelError;
pub use fixture::FixtureSet;
pub use holding::Holdings;

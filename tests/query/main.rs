//! Query pipeline integration tests

#[path = "../common/mod.rs"]
mod common;

mod filter_properties;
mod scenarios;
mod sort_properties;

//! Shared pieces of the Chef contract suite.
//!
//! This crate provides:
//! - [`ttl`] — storage time-to-live constants and extension helpers.
//! - [`mintable`] — the client interface for reward tokens that the staking
//!   engine is allowed to mint from.

#![no_std]

pub mod mintable;
pub mod ttl;

pub use mintable::{MintableTokenClient, MintableTokenInterface};

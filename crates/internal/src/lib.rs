//! Internal shared utilities for the ccrypt library
//!
//! Nothing in this crate is a public contract; it exists so the member crates
//! agree on one implementation of the low-level helpers they all need.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

//! Trait definitions for the ccrypt public API

pub mod kex;
pub mod serialize;

pub use kex::KeyExchange;
pub use serialize::{Serialize, SerializeSecret};

//! Elliptic curve primitives
//!
//! Each supported curve lives in its own submodule with its own field,
//! point and scalar types; there is no generic curve abstraction, which keeps
//! every operation monomorphic and auditable.

pub mod b233k;

// Every export takes raw pointers from C and null-checks them first.
#![allow(clippy::missing_safety_doc)]
//! # ip4addr-abi
//!
//! ABI-compatible extern "C" boundary layer for ip4addr.
//!
//! This crate produces a `cdylib` exposing the `sys_ip4addr_*` conversion
//! routines and the `ip4_addr_*` accessors that C code used to get from
//! header macros. Each function null-checks its pointers and delegates to
//! the safe implementations in `ip4addr-core`.
//!
//! ```text
//! C caller -> ABI entry (this crate) -> Core impl -> return
//! ```
//!
//! `struct ip4_addr` on the C side is layout-compatible with
//! [`ip4addr_core::Ip4Addr`] (`#[repr(transparent)]` over a network-order
//! `u32`).

mod macros;

pub mod addr_abi;
pub mod inet_abi;

pub use ip4addr_core::Ip4Addr;

//! # ip4addr-core
//!
//! Safe Rust IPv4 address handling for a network-protocol stack.
//!
//! This crate provides the binary address type ([`Ip4Addr`], always network
//! byte order), the legacy classful and special-address predicates, and the
//! dotted-decimal codec (`aton`/`ntoa`). No `unsafe` code is permitted at the
//! crate level.

#![deny(unsafe_code)]

pub mod addr;
pub mod codec;
pub mod config;
pub mod error;

pub use addr::{AddrClass, HostOrder, Ip4Addr, copy, get_network, netmask_valid};
pub use codec::{IP4ADDR_STRLEN_MAX, aton, aton_strict, aton_with, ntoa, ntoa_r};
pub use config::ParseMode;
pub use error::{ErrorKind, Ip4Error, ParseFailure};

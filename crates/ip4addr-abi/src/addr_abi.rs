//! ABI layer for the `ip4_addr_*` accessors.
//!
//! These were header macros in C. Exporting them as functions keeps the
//! null tolerance of `ip4_addr_set`/`ip4_addr_set_hton` and makes every
//! other entry a no-op (or a zero/false result) on null pointers instead of
//! a crash.

use std::ffi::{c_int, c_uint};

use ip4addr_core::addr::{self, HostOrder};
use ip4addr_core::Ip4Addr;

use crate::macros::abi_fn;

abi_fn! {
    /// `IP4_ADDR(ipaddr, a, b, c, d)`: each component is truncated to 8 bits.
    fn ip4_addr_make(ipaddr: *mut Ip4Addr, a: c_uint, b: c_uint, c: c_uint, d: c_uint) {
        if let Some(dst) = ipaddr.as_mut() {
            *dst = Ip4Addr::from_octets_truncating(a, b, c, d);
        }
    }
}

abi_fn! {
    /// Bitwise copy of `*src` into `*dest`.
    fn ip4_addr_copy(dest: *mut Ip4Addr, src: *const Ip4Addr) {
        if let (Some(dst), Some(src)) = (dest.as_mut(), src.as_ref()) {
            addr::copy(dst, src);
        }
    }
}

abi_fn! {
    /// Copy `*src` into `*dest`, or zero `*dest` when `src` is null.
    fn ip4_addr_set(dest: *mut Ip4Addr, src: *const Ip4Addr) {
        if let Some(dst) = dest.as_mut() {
            dst.set(src.as_ref());
        }
    }
}

abi_fn! {
    /// Store the host-order `*src` in network order, or zero `*dest` when `src` is null.
    fn ip4_addr_set_hton(dest: *mut Ip4Addr, src: *const u32) {
        if let Some(dst) = dest.as_mut() {
            dst.set_hton(src.as_ref().map(|&v| HostOrder(v)));
        }
    }
}

abi_fn! {
    fn ip4_addr_set_zero(ipaddr: *mut Ip4Addr) {
        if let Some(dst) = ipaddr.as_mut() {
            dst.set_zero();
        }
    }
}

abi_fn! {
    fn ip4_addr_set_any(ipaddr: *mut Ip4Addr) {
        if let Some(dst) = ipaddr.as_mut() {
            dst.set_any();
        }
    }
}

abi_fn! {
    fn ip4_addr_set_loopback(ipaddr: *mut Ip4Addr) {
        if let Some(dst) = ipaddr.as_mut() {
            dst.set_loopback();
        }
    }
}

abi_fn! {
    /// Store a raw network-order value. No conversion.
    fn ip4_addr_set_u32(ipaddr: *mut Ip4Addr, src_u32: u32) {
        if let Some(dst) = ipaddr.as_mut() {
            dst.set_u32(src_u32);
        }
    }
}

abi_fn! {
    /// The raw network-order value, or 0 for a null pointer. No conversion.
    fn ip4_addr_get_u32(ipaddr: *const Ip4Addr) -> u32 {
        ipaddr.as_ref().map_or(0, Ip4Addr::get_u32)
    }
}

abi_fn! {
    fn ip4_addr_isloopback(ipaddr: *const Ip4Addr) -> c_int {
        c_int::from(ipaddr.as_ref().is_some_and(Ip4Addr::is_loopback))
    }
}

abi_fn! {
    /// `*target = *host & *netmask`. Null inputs leave `*target` untouched.
    fn ip4_addr_get_network(target: *mut Ip4Addr, host: *const Ip4Addr, netmask: *const Ip4Addr) {
        if let (Some(dst), Some(host), Some(mask)) = (target.as_mut(), host.as_ref(), netmask.as_ref()) {
            *dst = addr::get_network(host, mask);
        }
    }
}

abi_fn! {
    /// 1 if the network-order `netmask` is a contiguous run of leading ones.
    fn ip4_addr_netmask_valid(netmask: u32) -> c_int {
        c_int::from(addr::netmask_valid(&Ip4Addr::from_raw(netmask)))
    }
}

//! Byte-order helpers and the host-order integer wrapper.
//!
//! An [`Ip4Addr`](super::Ip4Addr) always holds network byte order. Values
//! computed arithmetically (`a << 24 | b << 16 | ...`) are host order and
//! travel as [`HostOrder`] so the two cannot be mixed up silently.

use core::fmt;

/// Converts a 16-bit value from host byte order to network byte order (big-endian).
///
/// Equivalent to C `htons`.
#[inline]
#[must_use]
pub const fn htons(v: u16) -> u16 {
    v.to_be()
}

/// Converts a 32-bit value from host byte order to network byte order (big-endian).
///
/// Equivalent to C `htonl`.
#[inline]
#[must_use]
pub const fn htonl(v: u32) -> u32 {
    v.to_be()
}

/// Converts a 16-bit value from network byte order to host byte order.
///
/// Equivalent to C `ntohs`.
#[inline]
#[must_use]
pub const fn ntohs(v: u16) -> u16 {
    u16::from_be(v)
}

/// Converts a 32-bit value from network byte order to host byte order.
///
/// Equivalent to C `ntohl`.
#[inline]
#[must_use]
pub const fn ntohl(v: u32) -> u32 {
    u32::from_be(v)
}

/// A 32-bit IPv4 value in host byte order.
///
/// The numeric value reads naturally: `127.0.0.1` is `0x7f00_0001` on every
/// platform. Use [`Ip4Addr::from_host`](super::Ip4Addr::from_host) to store
/// it and [`Ip4Addr::to_host`](super::Ip4Addr::to_host) to get it back.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostOrder(pub u32);

impl HostOrder {
    /// The numeric host-order value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Reorder into the network-order raw value.
    #[inline]
    #[must_use]
    pub const fn to_network(self) -> u32 {
        htonl(self.0)
    }

    /// Wrap a raw network-order value after reordering it to host order.
    #[inline]
    #[must_use]
    pub const fn from_network(raw: u32) -> Self {
        Self(ntohl(raw))
    }
}

impl fmt::Debug for HostOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostOrder({:#010x})", self.0)
    }
}

impl From<u32> for HostOrder {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<HostOrder> for u32 {
    fn from(v: HostOrder) -> Self {
        v.0
    }
}

/// Pack four octets into a host-order value, keeping only the low 8 bits of each.
///
/// Out-of-range inputs are truncated, not rejected: `make_u32(256, 0, 0, 1)`
/// yields `0.0.0.1`.
#[inline]
#[must_use]
pub const fn make_u32(a: u32, b: u32, c: u32, d: u32) -> HostOrder {
    HostOrder(((a & 0xff) << 24) | ((b & 0xff) << 16) | ((c & 0xff) << 8) | (d & 0xff))
}

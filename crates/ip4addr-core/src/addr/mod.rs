//! IPv4 address value type.
//!
//! [`Ip4Addr`] is layout-compatible with C `struct ip4_addr { uint32_t addr; }`
//! and always stores network byte order. Host-order arithmetic goes through
//! [`HostOrder`]; the raw accessors perform no conversion at all.

pub mod class;
pub mod order;

use core::cmp::Ordering;
use core::fmt;

pub use class::AddrClass;
pub use order::{HostOrder, htonl, htons, make_u32, ntohl, ntohs};

/// `0.0.0.0`, host order.
pub const IPADDR_ANY: u32 = 0x0000_0000;
/// `255.255.255.255`, host order. Historically also the parse-failure sentinel.
pub const IPADDR_NONE: u32 = 0xffff_ffff;
/// `255.255.255.255`, host order.
pub const IPADDR_BROADCAST: u32 = 0xffff_ffff;
/// `127.0.0.1`, host order.
pub const IPADDR_LOOPBACK: u32 = 0x7f00_0001;

/// An IPv4 address in network byte order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Ip4Addr {
    addr: u32,
}

impl Ip4Addr {
    /// The wildcard address `0.0.0.0`.
    pub const ANY: Self = Self::from_host(HostOrder(IPADDR_ANY));
    /// The limited broadcast address `255.255.255.255`.
    pub const BROADCAST: Self = Self::from_host(HostOrder(IPADDR_BROADCAST));
    /// "No address"; the same bits as [`Ip4Addr::BROADCAST`].
    pub const NONE: Self = Self::from_host(HostOrder(IPADDR_NONE));
    /// `127.0.0.1`.
    pub const LOOPBACK: Self = Self::from_host(HostOrder(IPADDR_LOOPBACK));

    /// Build `a.b.c.d`.
    #[inline]
    #[must_use]
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            addr: u32::from_ne_bytes([a, b, c, d]),
        }
    }

    /// Build from four integers, keeping the low 8 bits of each.
    #[inline]
    #[must_use]
    pub const fn from_octets_truncating(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self::from_host(make_u32(a, b, c, d))
    }

    /// Build from wire bytes (most significant first).
    #[inline]
    #[must_use]
    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Self {
            addr: u32::from_ne_bytes(octets),
        }
    }

    /// Wire bytes, most significant first.
    #[inline]
    #[must_use]
    pub const fn octets(&self) -> [u8; 4] {
        self.addr.to_ne_bytes()
    }

    /// One octet by wire position (0 is the most significant).
    #[inline]
    #[must_use]
    pub const fn octet(&self, index: usize) -> Option<u8> {
        if index < 4 {
            Some(self.octets()[index])
        } else {
            None
        }
    }

    /// Store a host-order value, converting it to network order.
    #[inline]
    #[must_use]
    pub const fn from_host(v: HostOrder) -> Self {
        Self { addr: htonl(v.0) }
    }

    /// The address as a host-order value.
    #[inline]
    #[must_use]
    pub const fn to_host(&self) -> HostOrder {
        HostOrder(ntohl(self.addr))
    }

    /// Wrap a raw network-order value. No conversion.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self { addr: raw }
    }

    /// The raw network-order value. No conversion.
    #[inline]
    #[must_use]
    pub const fn raw(&self) -> u32 {
        self.addr
    }

    /// Same as [`Ip4Addr::raw`]: network order, no conversion.
    #[inline]
    #[must_use]
    pub const fn get_u32(&self) -> u32 {
        self.addr
    }

    /// Overwrite with a raw network-order value. No conversion.
    #[inline]
    pub fn set_u32(&mut self, raw: u32) {
        self.addr = raw;
    }

    /// Copy `src`, or become `0.0.0.0` when there is no source.
    #[inline]
    pub fn set(&mut self, src: Option<&Ip4Addr>) {
        self.addr = src.map_or(0, |s| s.addr);
    }

    /// Store a host-order source after converting it to network order,
    /// or become `0.0.0.0` when there is no source.
    #[inline]
    pub fn set_hton(&mut self, src: Option<HostOrder>) {
        self.addr = src.map_or(0, |s| htonl(s.0));
    }

    #[inline]
    pub fn set_zero(&mut self) {
        self.addr = 0;
    }

    /// Synonym of [`Ip4Addr::set_zero`]: the wildcard address is zero.
    #[inline]
    pub fn set_any(&mut self) {
        self.addr = Self::ANY.addr;
    }

    #[inline]
    pub fn set_loopback(&mut self) {
        self.addr = Self::LOOPBACK.addr;
    }

    /// `0.0.0.0`.
    #[inline]
    #[must_use]
    pub const fn is_any(&self) -> bool {
        self.addr == IPADDR_ANY
    }

    /// `255.255.255.255`.
    #[inline]
    #[must_use]
    pub const fn is_limited_broadcast(&self) -> bool {
        self.addr == IPADDR_BROADCAST
    }

    /// Anywhere in `127.0.0.0/8`.
    #[inline]
    #[must_use]
    pub const fn is_loopback(&self) -> bool {
        self.addr & htonl(class::IP_CLASSA_NET) == htonl(class::IP_LOOPBACKNET << 24)
    }

    /// Anywhere in `169.254.0.0/16`.
    #[inline]
    #[must_use]
    pub const fn is_link_local(&self) -> bool {
        self.addr & htonl(0xffff_0000) == htonl(0xa9fe_0000)
    }

    #[inline]
    #[must_use]
    pub const fn class(&self) -> AddrClass {
        AddrClass::of(self.to_host())
    }

    #[inline]
    #[must_use]
    pub const fn is_class_a(&self) -> bool {
        class::ip_class_a(self.to_host())
    }

    #[inline]
    #[must_use]
    pub const fn is_class_b(&self) -> bool {
        class::ip_class_b(self.to_host())
    }

    #[inline]
    #[must_use]
    pub const fn is_class_c(&self) -> bool {
        class::ip_class_c(self.to_host())
    }

    #[inline]
    #[must_use]
    pub const fn is_class_d(&self) -> bool {
        class::ip_class_d(self.to_host())
    }

    #[inline]
    #[must_use]
    pub const fn is_multicast(&self) -> bool {
        class::ip_multicast(self.to_host())
    }

    #[inline]
    #[must_use]
    pub const fn is_experimental(&self) -> bool {
        class::ip_experimental(self.to_host())
    }

    #[inline]
    #[must_use]
    pub const fn is_bad_class(&self) -> bool {
        class::ip_badclass(self.to_host())
    }

    /// Network part under `netmask`. See [`get_network`].
    #[inline]
    #[must_use]
    pub const fn network(&self, netmask: &Ip4Addr) -> Ip4Addr {
        get_network(self, netmask)
    }

    /// True when both addresses share the network part under `netmask`.
    #[inline]
    #[must_use]
    pub const fn net_eq(&self, other: &Ip4Addr, netmask: &Ip4Addr) -> bool {
        self.addr & netmask.addr == other.addr & netmask.addr
    }

    /// Broadcast test against an interface configured with `netif_addr`/`netmask`.
    ///
    /// True for `255.255.255.255`, for `0.0.0.0`, and for the directed
    /// broadcast of the interface subnet. The interface address itself is
    /// never a broadcast address, even under an all-ones mask.
    #[must_use]
    pub const fn is_broadcast(&self, netif_addr: &Ip4Addr, netmask: &Ip4Addr) -> bool {
        if self.addr == IPADDR_BROADCAST || self.addr == IPADDR_ANY {
            return true;
        }
        if self.addr == netif_addr.addr {
            return false;
        }
        let host_bits = !netmask.addr;
        self.net_eq(netif_addr, netmask) && self.addr & host_bits == IPADDR_BROADCAST & host_bits
    }
}

/// `host & netmask` on the raw values.
///
/// Both operands are network order by construction. The mask is not
/// checked for contiguity; a malformed mask yields a well-defined but
/// meaningless result.
#[inline]
#[must_use]
pub const fn get_network(host: &Ip4Addr, netmask: &Ip4Addr) -> Ip4Addr {
    Ip4Addr::from_raw(host.addr & netmask.addr)
}

/// Overwrite `dest` with `src` bit for bit.
#[inline]
pub fn copy(dest: &mut Ip4Addr, src: &Ip4Addr) {
    dest.addr = src.addr;
}

/// True when `netmask` is a run of leading ones followed only by zeros.
///
/// `0.0.0.0` and `255.255.255.255` are both valid.
#[inline]
#[must_use]
pub const fn netmask_valid(netmask: &Ip4Addr) -> bool {
    let h = netmask.to_host().0;
    h.leading_ones() + h.trailing_zeros() == 32
}

impl PartialOrd for Ip4Addr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ip4Addr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_host().cmp(&other.to_host())
    }
}

impl fmt::Display for Ip4Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl fmt::Debug for Ip4Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ip4Addr({self})")
    }
}

impl From<std::net::Ipv4Addr> for Ip4Addr {
    fn from(a: std::net::Ipv4Addr) -> Self {
        Self::from_octets(a.octets())
    }
}

impl From<Ip4Addr> for std::net::Ipv4Addr {
    fn from(a: Ip4Addr) -> Self {
        let [x, y, z, w] = a.octets();
        std::net::Ipv4Addr::new(x, y, z, w)
    }
}

impl From<HostOrder> for Ip4Addr {
    fn from(v: HostOrder) -> Self {
        Self::from_host(v)
    }
}

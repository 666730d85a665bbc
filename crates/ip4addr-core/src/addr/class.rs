//! Legacy classful-address rules.
//!
//! These predicates classify by leading bits only. They exist for
//! compatibility with code that still asks "is this class A?"; subnet
//! membership is decided with explicit netmasks, not with these masks.

use super::order::HostOrder;

pub const IP_CLASSA_NET: u32 = 0xff00_0000;
pub const IP_CLASSA_NSHIFT: u32 = 24;
pub const IP_CLASSA_HOST: u32 = !IP_CLASSA_NET;
pub const IP_CLASSA_MAX: u32 = 128;

pub const IP_CLASSB_NET: u32 = 0xffff_0000;
pub const IP_CLASSB_NSHIFT: u32 = 16;
pub const IP_CLASSB_HOST: u32 = !IP_CLASSB_NET;
pub const IP_CLASSB_MAX: u32 = 65536;

pub const IP_CLASSC_NET: u32 = 0xffff_ff00;
pub const IP_CLASSC_NSHIFT: u32 = 8;
pub const IP_CLASSC_HOST: u32 = !IP_CLASSC_NET;

// Class D has no real net/host split; routing needn't know.
pub const IP_CLASSD_NET: u32 = 0xf000_0000;
pub const IP_CLASSD_NSHIFT: u32 = 28;
pub const IP_CLASSD_HOST: u32 = 0x0fff_ffff;

/// The loopback network number (`127.0.0.0/8`).
pub const IP_LOOPBACKNET: u32 = 127;

#[inline]
#[must_use]
pub const fn ip_class_a(a: HostOrder) -> bool {
    a.0 & 0x8000_0000 == 0
}

#[inline]
#[must_use]
pub const fn ip_class_b(a: HostOrder) -> bool {
    a.0 & 0xc000_0000 == 0x8000_0000
}

#[inline]
#[must_use]
pub const fn ip_class_c(a: HostOrder) -> bool {
    a.0 & 0xe000_0000 == 0xc000_0000
}

#[inline]
#[must_use]
pub const fn ip_class_d(a: HostOrder) -> bool {
    a.0 & 0xf000_0000 == 0xe000_0000
}

/// Alias of [`ip_class_d`].
#[inline]
#[must_use]
pub const fn ip_multicast(a: HostOrder) -> bool {
    ip_class_d(a)
}

/// Top four bits set. Same test as [`ip_badclass`].
#[inline]
#[must_use]
pub const fn ip_experimental(a: HostOrder) -> bool {
    a.0 & 0xf000_0000 == 0xf000_0000
}

/// Top four bits set. Same test as [`ip_experimental`].
#[inline]
#[must_use]
pub const fn ip_badclass(a: HostOrder) -> bool {
    a.0 & 0xf000_0000 == 0xf000_0000
}

/// Classful category of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddrClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Experimental / "bad class" (`240.0.0.0/4`).
    E,
}

impl AddrClass {
    /// Classify a host-order value. Every value falls into exactly one class.
    #[must_use]
    pub const fn of(a: HostOrder) -> Self {
        if ip_class_a(a) {
            Self::A
        } else if ip_class_b(a) {
            Self::B
        } else if ip_class_c(a) {
            Self::C
        } else if ip_class_d(a) {
            Self::D
        } else {
            Self::E
        }
    }

    /// Classful network mask, when the class defines one.
    #[must_use]
    pub const fn net_mask(self) -> Option<u32> {
        match self {
            Self::A => Some(IP_CLASSA_NET),
            Self::B => Some(IP_CLASSB_NET),
            Self::C => Some(IP_CLASSC_NET),
            Self::D => Some(IP_CLASSD_NET),
            Self::E => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

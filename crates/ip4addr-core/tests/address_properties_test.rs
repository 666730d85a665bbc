//! Integration tests: address value and codec properties.
//!
//! Run: cargo test -p ip4addr-core --test address_properties_test

use ip4addr_core::addr::{HostOrder, IPADDR_LOOPBACK, make_u32};
use ip4addr_core::{
    AddrClass, ErrorKind, IP4ADDR_STRLEN_MAX, Ip4Addr, aton, get_network, ntoa, ntoa_r,
};

#[test]
fn every_canonical_octet_roundtrips() {
    // Sweep each octet position through its full range with the others fixed.
    for pos in 0..4 {
        for v in 0..=255u8 {
            let mut octets = [10u8, 20, 30, 40];
            octets[pos] = v;
            let text = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
            let addr = aton(text.as_bytes()).unwrap();
            assert_eq!(addr.octets(), octets);
            assert_eq!(ntoa(&addr), text);
        }
    }
}

#[test]
fn octet_construction_matches_big_endian_packing() {
    for &(a, b, c, d) in &[
        (0u8, 0u8, 0u8, 0u8),
        (127, 0, 0, 1),
        (192, 168, 1, 10),
        (255, 255, 255, 255),
        (1, 2, 3, 4),
    ] {
        let expected =
            (u32::from(a) << 24) | (u32::from(b) << 16) | (u32::from(c) << 8) | u32::from(d);
        let addr = Ip4Addr::new(a, b, c, d);
        assert_eq!(addr.raw(), expected.to_be());
        assert_eq!(addr.to_host(), HostOrder(expected));
        assert_eq!(
            make_u32(a.into(), b.into(), c.into(), d.into()),
            HostOrder(expected)
        );
    }
}

#[test]
fn special_values_parse_to_constants() {
    assert_eq!(aton(b"255.255.255.255").unwrap(), Ip4Addr::BROADCAST);
    assert_eq!(aton(b"255.255.255.255").unwrap(), Ip4Addr::NONE);

    let any = aton(b"0.0.0.0").unwrap();
    assert_eq!(any, Ip4Addr::ANY);
    assert!(!any.is_loopback());

    let lo = aton(b"127.0.0.1").unwrap();
    assert!(lo.is_loopback());
    assert_eq!(lo.to_host(), HostOrder(IPADDR_LOOPBACK));
    assert!(aton(b"127.255.255.255").unwrap().is_loopback());
}

#[test]
fn malformed_text_is_rejected() {
    let cases: &[&[u8]] = &[b"256.1.1.1", b"1.2.3.4.5", b"", b"abc", b"1.2.3.4x", b"."];
    for &bad in cases {
        let err = aton(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailure, "input {bad:?}");
    }
}

#[test]
fn three_field_form_places_tail_in_low_bits() {
    assert_eq!(aton(b"1.2.3").unwrap(), aton(b"1.2.0.3").unwrap());
}

#[test]
fn bounded_render_requires_terminator_space() {
    let mut small = [0u8; IP4ADDR_STRLEN_MAX - 1];
    let err = ntoa_r(&Ip4Addr::BROADCAST, &mut small).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferTooSmall);

    let mut exact = [0u8; IP4ADDR_STRLEN_MAX];
    assert_eq!(
        ntoa_r(&Ip4Addr::BROADCAST, &mut exact).unwrap(),
        "255.255.255.255"
    );
}

#[test]
fn network_of_private_host() {
    let host = aton(b"192.168.1.10").unwrap();
    let mask = aton(b"255.255.255.0").unwrap();
    assert_eq!(get_network(&host, &mask), aton(b"192.168.1.0").unwrap());
}

#[test]
fn classful_predicates() {
    let cases = [
        ("10.0.0.1", AddrClass::A),
        ("172.16.0.1", AddrClass::B),
        ("192.168.0.1", AddrClass::C),
        ("224.0.0.1", AddrClass::D),
        ("240.0.0.1", AddrClass::E),
    ];
    for (text, class) in cases {
        let addr: Ip4Addr = text.parse().unwrap();
        assert_eq!(addr.class(), class, "{text}");
    }
    let mcast: Ip4Addr = "224.0.0.1".parse().unwrap();
    assert!(mcast.is_multicast());
    let exp: Ip4Addr = "240.0.0.1".parse().unwrap();
    assert!(exp.is_experimental() && exp.is_bad_class());
}

//! Dotted-decimal text conversion.
//!
//! `aton` turns text into an [`Ip4Addr`]; `ntoa_r` renders into caller
//! storage and `ntoa` returns an owned string. All logic is safe Rust with
//! no allocation outside `ntoa`.

use core::str::FromStr;

use crate::addr::{HostOrder, Ip4Addr};
use crate::config::{self, ParseMode};
use crate::error::{Ip4Error, ParseFailure};

/// Longest rendered address including the NUL terminator: `"255.255.255.255\0"`.
pub const IP4ADDR_STRLEN_MAX: usize = 16;

// ---------------------------------------------------------------------------
// aton
// ---------------------------------------------------------------------------

/// Parses IPv4 address text using the historical `inet_aton` grammar.
///
/// Accepts `a.b.c.d`, `a.b.c` (16-bit tail), `a.b` (24-bit tail) and `a`
/// (whole 32 bits). Each field may be decimal, octal (leading `0`) or
/// hexadecimal (`0x`). Parsing stops at end of input, a NUL byte or C
/// `isspace` whitespace (vertical tab included); whatever follows such a
/// terminator is ignored.
pub fn aton(src: &[u8]) -> Result<Ip4Addr, Ip4Error> {
    let host = parse_legacy(src)?;
    Ok(Ip4Addr::from_host(host))
}

/// Parses canonical dotted-quad text only: four decimal fields, no leading
/// zeros, nothing after the last field except NUL padding.
pub fn aton_strict(src: &[u8]) -> Result<Ip4Addr, Ip4Error> {
    let host = parse_strict(src)?;
    Ok(Ip4Addr::from_host(host))
}

/// Parses with an explicit grammar.
pub fn aton_with(src: &[u8], mode: ParseMode) -> Result<Ip4Addr, Ip4Error> {
    match mode {
        ParseMode::Legacy => aton(src),
        ParseMode::Strict => aton_strict(src),
    }
}

/// Parses with the process-wide grammar from [`config::parse_mode`].
pub fn aton_configured(src: &[u8]) -> Result<Ip4Addr, Ip4Error> {
    aton_with(src, config::parse_mode())
}

#[inline]
fn is_terminator(b: u8) -> bool {
    // C `isspace` set, which includes vertical tab.
    matches!(b, 0 | b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn parse_legacy(src: &[u8]) -> Result<HostOrder, ParseFailure> {
    if src.first().is_none_or(|&b| b == 0) {
        return Err(ParseFailure::Empty);
    }

    // Leading fields; the last field stays in `tail`.
    let mut parts = [0u32; 3];
    let mut nparts = 0usize;
    let mut i = 0usize;
    let tail = loop {
        let (val, next) = parse_field(src, i, nparts)?;
        i = next;
        if src.get(i) != Some(&b'.') {
            break val;
        }
        if nparts >= parts.len() {
            return Err(ParseFailure::TooManyFields);
        }
        parts[nparts] = val;
        nparts += 1;
        i += 1;
    };

    if let Some(&b) = src.get(i)
        && !is_terminator(b)
    {
        return Err(ParseFailure::TrailingGarbage { offset: i });
    }

    for (field, &value) in parts[..nparts].iter().enumerate() {
        if value > 0xff {
            return Err(ParseFailure::FieldOutOfRange {
                field,
                value,
                max: 0xff,
            });
        }
    }

    let tail_max = match nparts {
        0 => u32::MAX,
        1 => 0x00ff_ffff,
        2 => 0x0000_ffff,
        _ => 0x0000_00ff,
    };
    if tail > tail_max {
        return Err(ParseFailure::FieldOutOfRange {
            field: nparts,
            value: tail,
            max: tail_max,
        });
    }

    let mut acc = tail;
    for (k, &value) in parts[..nparts].iter().enumerate() {
        acc |= value << (24 - 8 * k);
    }
    Ok(HostOrder(acc))
}

/// Parse one numeric field starting at `start`. Returns the value and the
/// offset of the first byte after it.
fn parse_field(src: &[u8], start: usize, field: usize) -> Result<(u32, usize), ParseFailure> {
    let mut i = start;
    if !src.get(i).is_some_and(|b| b.is_ascii_digit()) {
        return Err(ParseFailure::ExpectedDigit { offset: i });
    }

    let mut base = 10u32;
    if src[i] == b'0' {
        if matches!(src.get(i + 1), Some(b'x' | b'X')) {
            base = 16;
            i += 2;
            if !src.get(i).is_some_and(|b| b.is_ascii_hexdigit()) {
                return Err(ParseFailure::ExpectedDigit { offset: i });
            }
        } else {
            base = 8;
        }
    }

    let mut val = 0u32;
    while let Some(&c) = src.get(i) {
        let digit = match c {
            b'0'..=b'9' => u32::from(c - b'0'),
            b'a'..=b'f' => u32::from(c - b'a' + 10),
            b'A'..=b'F' => u32::from(c - b'A' + 10),
            _ => break,
        };
        if digit >= base {
            break;
        }
        val = val
            .checked_mul(base)
            .and_then(|v| v.checked_add(digit))
            .ok_or(ParseFailure::Overflow { field })?;
        i += 1;
    }
    Ok((val, i))
}

fn parse_strict(src: &[u8]) -> Result<HostOrder, ParseFailure> {
    let end = src.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
    let s = &src[..end];
    if s.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let mut fields = s.split(|&b| b == b'.');
    let mut octets = [0u8; 4];
    let mut offset = 0usize;
    for (field, octet) in octets.iter_mut().enumerate() {
        let part = fields
            .next()
            .ok_or(ParseFailure::NonCanonical { offset: s.len() })?;
        if part.is_empty() {
            return Err(ParseFailure::ExpectedDigit { offset });
        }
        if let Some(pos) = part.iter().position(|b| !b.is_ascii_digit()) {
            return Err(ParseFailure::NonCanonical {
                offset: offset + pos,
            });
        }
        // Reject leading zeros (octal ambiguity).
        if part.len() > 1 && part[0] == b'0' {
            return Err(ParseFailure::NonCanonical { offset });
        }
        let value = part.iter().fold(0u32, |acc, &b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        });
        *octet = u8::try_from(value).map_err(|_| ParseFailure::FieldOutOfRange {
            field,
            value,
            max: 0xff,
        })?;
        offset += part.len() + 1;
    }
    if fields.next().is_some() {
        return Err(ParseFailure::TooManyFields);
    }
    Ok(HostOrder(u32::from_be_bytes(octets)))
}

impl FromStr for Ip4Addr {
    type Err = Ip4Error;

    /// Uses the legacy grammar regardless of the configured mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        aton(s.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// ntoa
// ---------------------------------------------------------------------------

/// Renders `addr` as `d.d.d.d` followed by a NUL byte into `buf`.
///
/// Needs `text length + 1` bytes. When `buf` is shorter nothing is written
/// and `BufferTooSmall` is returned. On success the returned `&str` borrows
/// the text (without the terminator) from `buf`.
pub fn ntoa_r<'a>(addr: &Ip4Addr, buf: &'a mut [u8]) -> Result<&'a str, Ip4Error> {
    let mut scratch = [0u8; IP4ADDR_STRLEN_MAX];
    let len = format_octets(addr, &mut scratch);
    let needed = len + 1;
    if buf.len() < needed {
        return Err(Ip4Error::BufferTooSmall {
            needed,
            capacity: buf.len(),
        });
    }
    buf[..len].copy_from_slice(&scratch[..len]);
    buf[len] = 0;
    // ASCII digits and dots only.
    Ok(core::str::from_utf8(&buf[..len]).unwrap_or_default())
}

/// Renders `addr` as a freshly owned `d.d.d.d` string.
#[must_use]
pub fn ntoa(addr: &Ip4Addr) -> String {
    let mut scratch = [0u8; IP4ADDR_STRLEN_MAX];
    let len = format_octets(addr, &mut scratch);
    scratch[..len].iter().map(|&b| char::from(b)).collect()
}

/// Length of the rendered text, excluding the NUL terminator.
#[must_use]
pub fn rendered_len(addr: &Ip4Addr) -> usize {
    addr.octets().iter().map(|&o| decimal_width(o)).sum::<usize>() + 3
}

fn decimal_width(v: u8) -> usize {
    match v {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}

fn format_octets(addr: &Ip4Addr, out: &mut [u8; IP4ADDR_STRLEN_MAX]) -> usize {
    let mut len = 0usize;
    for (n, octet) in addr.octets().into_iter().enumerate() {
        if n > 0 {
            out[len] = b'.';
            len += 1;
        }
        len += write_decimal(octet, &mut out[len..]);
    }
    len
}

fn write_decimal(mut v: u8, out: &mut [u8]) -> usize {
    let mut digits = [0u8; 3];
    let mut n = 0usize;
    loop {
        digits[n] = b'0' + v % 10;
        n += 1;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    for (k, slot) in out[..n].iter_mut().enumerate() {
        *slot = digits[n - 1 - k];
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn parse(s: &str) -> Result<Ip4Addr, Ip4Error> {
        aton(s.as_bytes())
    }

    fn reason(s: &str) -> ParseFailure {
        match parse(s) {
            Err(Ip4Error::Parse(r)) => r,
            other => panic!("expected parse failure for {s:?}, got {other:?}"),
        }
    }

    // -- aton: four-field form --

    #[test]
    fn test_aton_dotted_quad() {
        assert_eq!(parse("192.168.1.1").unwrap(), Ip4Addr::new(192, 168, 1, 1));
        assert_eq!(parse("0.0.0.0").unwrap(), Ip4Addr::ANY);
        assert_eq!(parse("255.255.255.255").unwrap(), Ip4Addr::BROADCAST);
        assert_eq!(parse("255.255.255.255").unwrap(), Ip4Addr::NONE);
    }

    #[test]
    fn test_aton_octet_out_of_range() {
        assert_eq!(
            reason("256.1.1.1"),
            ParseFailure::FieldOutOfRange {
                field: 0,
                value: 256,
                max: 0xff
            }
        );
        assert_eq!(
            reason("1.1.1.256"),
            ParseFailure::FieldOutOfRange {
                field: 3,
                value: 256,
                max: 0xff
            }
        );
    }

    #[test]
    fn test_aton_too_many_fields() {
        assert_eq!(reason("1.2.3.4.5"), ParseFailure::TooManyFields);
    }

    #[test]
    fn test_aton_empty() {
        assert_eq!(reason(""), ParseFailure::Empty);
        assert_eq!(aton(b"\0").unwrap_err().kind(), ErrorKind::ParseFailure);
    }

    // -- aton: short forms --

    #[test]
    fn test_aton_three_fields() {
        assert_eq!(parse("1.2.3").unwrap(), parse("1.2.0.3").unwrap());
        assert_eq!(parse("1.2.65535").unwrap(), Ip4Addr::new(1, 2, 255, 255));
        assert!(parse("1.2.65536").is_err());
    }

    #[test]
    fn test_aton_two_fields() {
        assert_eq!(parse("10.1").unwrap(), Ip4Addr::new(10, 0, 0, 1));
        assert_eq!(parse("10.16777215").unwrap(), Ip4Addr::new(10, 255, 255, 255));
        assert_eq!(
            reason("10.16777216"),
            ParseFailure::FieldOutOfRange {
                field: 1,
                value: 0x0100_0000,
                max: 0x00ff_ffff
            }
        );
        assert!(parse("256.1").is_err());
    }

    #[test]
    fn test_aton_one_field() {
        assert_eq!(parse("2130706433").unwrap(), Ip4Addr::LOOPBACK);
        assert_eq!(parse("4294967295").unwrap(), Ip4Addr::BROADCAST);
        assert_eq!(reason("4294967296"), ParseFailure::Overflow { field: 0 });
    }

    // -- aton: radix prefixes --

    #[test]
    fn test_aton_hex_and_octal() {
        assert_eq!(parse("0x7f.0.0.1").unwrap(), Ip4Addr::LOOPBACK);
        assert_eq!(parse("0X7F.0.0.01").unwrap(), Ip4Addr::LOOPBACK);
        assert_eq!(parse("010.0.0.1").unwrap(), Ip4Addr::new(8, 0, 0, 1));
        assert_eq!(parse("0x7f000001").unwrap(), Ip4Addr::LOOPBACK);
        assert_eq!(parse("017700000001").unwrap(), Ip4Addr::LOOPBACK);
        assert_eq!(parse("0.0xff.0377.255").unwrap(), Ip4Addr::new(0, 255, 255, 255));
    }

    #[test]
    fn test_aton_invalid_octal_digit() {
        assert_eq!(reason("08.0.0.1"), ParseFailure::TrailingGarbage { offset: 1 });
        assert!(parse("1.2.3.09").is_err());
    }

    #[test]
    fn test_aton_hex_prefix_without_digits() {
        assert_eq!(reason("0x.1.2.3"), ParseFailure::ExpectedDigit { offset: 2 });
        assert!(parse("0x").is_err());
    }

    // -- aton: termination --

    #[test]
    fn test_aton_trailing_garbage() {
        assert_eq!(reason("1.2.3.4x"), ParseFailure::TrailingGarbage { offset: 7 });
        assert_eq!(reason("1.2.3."), ParseFailure::ExpectedDigit { offset: 6 });
        assert_eq!(reason("1.2.3.4."), ParseFailure::TooManyFields);
        assert_eq!(reason("1..2.3"), ParseFailure::ExpectedDigit { offset: 2 });
        assert_eq!(reason(" 1.2.3.4"), ParseFailure::ExpectedDigit { offset: 0 });
        assert_eq!(reason("-1.2.3.4"), ParseFailure::ExpectedDigit { offset: 0 });
    }

    #[test]
    fn test_aton_stops_at_whitespace_or_nul() {
        assert_eq!(parse("10.0.0.1 # uplink").unwrap(), Ip4Addr::new(10, 0, 0, 1));
        assert_eq!(parse("10.0.0.1\n").unwrap(), Ip4Addr::new(10, 0, 0, 1));
        assert_eq!(aton(b"10.0.0.1\0garbage").unwrap(), Ip4Addr::new(10, 0, 0, 1));
    }

    #[test]
    fn test_aton_terminators_match_c_isspace() {
        let tails: [&[u8]; 5] = [b"\x0b", b"\x0bjunk", b"\x0c", b"\r", b"\t"];
        for tail in tails {
            let mut text = b"1.2.3.4".to_vec();
            text.extend_from_slice(tail);
            assert_eq!(aton(&text), Ok(Ip4Addr::new(1, 2, 3, 4)), "tail {tail:?}");
        }
        assert!(aton("1.2.3.4\u{a0}".as_bytes()).is_err());
    }

    // -- aton_strict --

    #[test]
    fn test_strict_accepts_canonical() {
        assert_eq!(aton_strict(b"192.168.1.1").unwrap(), Ip4Addr::new(192, 168, 1, 1));
        assert_eq!(aton_strict(b"1.2.3.4\0\0").unwrap(), Ip4Addr::new(1, 2, 3, 4));
    }

    #[test]
    fn test_strict_rejects_legacy_forms() {
        assert!(aton_strict(b"010.0.0.1").is_err());
        assert!(aton_strict(b"0x7f.0.0.1").is_err());
        assert!(aton_strict(b"1.2.3").is_err());
        assert!(aton_strict(b"2130706433").is_err());
        assert!(aton_strict(b"1.2.3.4 ").is_err());
        assert!(aton_strict(b"1.2.3.4.5").is_err());
        assert!(aton_strict(b"").is_err());
        assert!(matches!(
            aton_strict(b"1.2.3.999"),
            Err(Ip4Error::Parse(ParseFailure::FieldOutOfRange { field: 3, .. }))
        ));
    }

    #[test]
    fn test_aton_with_dispatches() {
        assert!(aton_with(b"1.2.3", ParseMode::Legacy).is_ok());
        assert!(aton_with(b"1.2.3", ParseMode::Strict).is_err());
    }

    #[test]
    fn test_from_str() {
        let a: Ip4Addr = "172.16.0.1".parse().unwrap();
        assert_eq!(a, Ip4Addr::new(172, 16, 0, 1));
        assert!("nope".parse::<Ip4Addr>().is_err());
    }

    // -- ntoa --

    #[test]
    fn test_ntoa_r_exact_capacity() {
        let mut buf = [0xAAu8; 16];
        let text = ntoa_r(&Ip4Addr::BROADCAST, &mut buf).unwrap();
        assert_eq!(text, "255.255.255.255");
        assert_eq!(buf[15], 0);
    }

    #[test]
    fn test_ntoa_r_too_small_writes_nothing() {
        let mut buf = [0xAAu8; 15];
        let err = ntoa_r(&Ip4Addr::BROADCAST, &mut buf).unwrap_err();
        assert_eq!(
            err,
            Ip4Error::BufferTooSmall {
                needed: 16,
                capacity: 15
            }
        );
        assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
        assert!(buf.iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_ntoa_r_short_address_small_buffer() {
        let mut buf = [0u8; 8];
        assert_eq!(ntoa_r(&Ip4Addr::ANY, &mut buf).unwrap(), "0.0.0.0");
        assert!(ntoa_r(&Ip4Addr::new(10, 0, 0, 1), &mut buf).is_err());
        assert!(ntoa_r(&Ip4Addr::ANY, &mut [0u8; 0]).is_err());
    }

    #[test]
    fn test_ntoa_owned() {
        assert_eq!(ntoa(&Ip4Addr::new(10, 0, 100, 7)), "10.0.100.7");
        assert_eq!(ntoa(&Ip4Addr::ANY), "0.0.0.0");
    }

    #[test]
    fn test_rendered_len() {
        assert_eq!(rendered_len(&Ip4Addr::ANY), 7);
        assert_eq!(rendered_len(&Ip4Addr::BROADCAST), 15);
        assert_eq!(rendered_len(&Ip4Addr::new(10, 0, 100, 7)), 10);
    }

    // -- Round-trip tests: aton -> ntoa --

    #[test]
    fn test_roundtrip_canonical() {
        for text in [
            "0.0.0.0",
            "127.0.0.1",
            "192.168.1.1",
            "255.255.255.255",
            "10.0.0.1",
            "1.22.133.44",
        ] {
            let addr = parse(text).unwrap();
            assert_eq!(ntoa(&addr), text, "roundtrip mismatch for {text:?}");
            assert_eq!(addr.to_string(), text);
        }
    }

    #[test]
    fn test_render_never_emits_radix_prefixes() {
        assert_eq!(ntoa(&parse("0x0a.010.0.0x1").unwrap()), "10.8.0.1");
    }
}

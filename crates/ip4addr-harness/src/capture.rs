//! Fixture capture.
//!
//! Runs input vectors through `ip4addr-core` and records the outputs as a
//! [`FixtureSet`], so a reviewed snapshot can pin current behavior.

use ip4addr_core::ParseMode;
use serde_json::{Value, json};

use crate::execute::{ExecError, execute_fixture_case};
use crate::fixtures::{FixtureCase, FixtureSet};

/// Schema version written by [`capture_fixture_set`].
pub const FIXTURE_VERSION: &str = "v1";
/// Family name used for the built-in vectors.
pub const CODEC_FAMILY: &str = "inet/ip4addr";

/// One input to capture.
#[derive(Debug, Clone)]
pub struct CaptureVector {
    pub name: String,
    pub function: String,
    pub reference: String,
    pub inputs: Value,
}

impl CaptureVector {
    pub fn new(name: &str, function: &str, reference: &str, inputs: Value) -> Self {
        Self {
            name: name.to_string(),
            function: function.to_string(),
            reference: reference.to_string(),
            inputs,
        }
    }
}

/// Execute every vector under both parse modes and record the outputs.
///
/// Vectors whose output does not depend on the mode become one `both` case.
/// Otherwise the vector is split into `_legacy` and `_strict` cases.
pub fn capture_fixture_set(
    family: &str,
    captured_at: &str,
    vectors: &[CaptureVector],
) -> Result<FixtureSet, ExecError> {
    let mut cases = Vec::with_capacity(vectors.len());
    for v in vectors {
        let legacy = execute_fixture_case(&v.function, &v.inputs, ParseMode::Legacy)?;
        let strict = execute_fixture_case(&v.function, &v.inputs, ParseMode::Strict)?;
        if legacy == strict {
            cases.push(case(v, &v.name, legacy, "both"));
        } else {
            cases.push(case(v, &format!("{}_legacy", v.name), legacy, "legacy"));
            cases.push(case(v, &format!("{}_strict", v.name), strict, "strict"));
        }
    }
    Ok(FixtureSet {
        version: FIXTURE_VERSION.to_string(),
        family: family.to_string(),
        captured_at: captured_at.to_string(),
        cases,
    })
}

fn case(v: &CaptureVector, name: &str, output: String, mode: &str) -> FixtureCase {
    FixtureCase {
        name: name.to_string(),
        function: v.function.clone(),
        reference: v.reference.clone(),
        inputs: v.inputs.clone(),
        expected_output: output,
        mode: mode.to_string(),
    }
}

/// Built-in vectors covering the codec and the value operations.
#[must_use]
pub fn default_vectors() -> Vec<CaptureVector> {
    const ATON: &str = "inet_aton(3)";
    const NTOA: &str = "inet_ntoa(3)";
    const CLASSFUL: &str = "RFC 791 classful addressing";

    let mut v: Vec<CaptureVector> = [
        ("dotted_quad", "192.168.1.10"),
        ("zero", "0.0.0.0"),
        ("all_ones", "255.255.255.255"),
        ("three_part", "10.1.300"),
        ("two_part", "127.1"),
        ("one_part", "3232235786"),
        ("hex_field", "0x7f.0.0.1"),
        ("octal_field", "010.0.0.1"),
        ("trailing_space", "1.2.3.4 extra"),
        ("leading_zero_octet", "192.168.01.1"),
        ("octet_overflow", "256.0.0.1"),
        ("too_many_fields", "1.2.3.4.5"),
        ("empty", ""),
        ("bad_octal_digit", "08.0.0.1"),
        ("bare_hex_prefix", "0x.1.2.3"),
        ("u32_overflow", "4294967296"),
        ("trailing_dot", "1.2.3."),
        ("letters", "a.b.c.d"),
    ]
    .into_iter()
    .map(|(name, text)| CaptureVector::new(&format!("aton_{name}"), "aton", ATON, json!({ "text": text })))
    .collect();

    for (name, addr, buflen) in [
        ("broadcast_fits", [255, 255, 255, 255], 16),
        ("broadcast_short", [255, 255, 255, 255], 15),
        ("zero_len", [1, 2, 3, 4], 0),
        ("minimal", [0, 0, 0, 0], 8),
    ] {
        v.push(CaptureVector::new(
            &format!("ntoa_r_{name}"),
            "ntoa_r",
            NTOA,
            json!({ "addr": addr, "buflen": buflen }),
        ));
    }

    v.push(CaptureVector::new("ntoa_mixed", "ntoa", NTOA, json!({ "addr": [10, 0, 100, 7] })));

    for (name, addr) in [
        ("a", [10, 0, 0, 1]),
        ("b", [172, 16, 0, 1]),
        ("c", [192, 168, 0, 1]),
        ("d", [224, 0, 0, 251]),
        ("e", [240, 0, 0, 1]),
    ] {
        v.push(CaptureVector::new(
            &format!("classify_{name}"),
            "classify",
            CLASSFUL,
            json!({ "addr": addr }),
        ));
    }

    v.extend([
        CaptureVector::new("loopback_net", "is_loopback", "RFC 1122", json!({ "addr": [127, 255, 0, 1] })),
        CaptureVector::new("not_loopback", "is_loopback", "RFC 1122", json!({ "addr": [128, 0, 0, 1] })),
        CaptureVector::new(
            "network_slash24",
            "get_network",
            "RFC 950",
            json!({ "host": [192, 168, 1, 10], "netmask": [255, 255, 255, 0] }),
        ),
        CaptureVector::new("netmask_contiguous", "netmask_valid", "RFC 950", json!({ "netmask": [255, 255, 240, 0] })),
        CaptureVector::new("netmask_holes", "netmask_valid", "RFC 950", json!({ "netmask": [255, 0, 255, 0] })),
        CaptureVector::new("make_truncates", "make", "IP4_ADDR", json!({ "parts": [266, 0, 0, 1] })),
    ]);
    v
}

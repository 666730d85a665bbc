//! Shared inputs for the ip4addr benchmarks.

/// Address text in every form the legacy parser accepts, plus one reject.
pub const ATON_INPUTS: &[(&str, &str)] = &[
    ("dotted_quad", "192.168.100.200"),
    ("short_form", "10.65535"),
    ("hex", "0xc0.0xa8.0x64.0xc8"),
    ("octal", "0300.0250.0144.0310"),
    ("single_u32", "3232261320"),
    ("reject", "192.168.100.256"),
];

/// Addresses spanning the shortest and longest rendered lengths.
pub const NTOA_OCTETS: &[[u8; 4]] = &[[0, 0, 0, 0], [10, 0, 0, 1], [192, 168, 1, 10], [255, 255, 255, 255]];

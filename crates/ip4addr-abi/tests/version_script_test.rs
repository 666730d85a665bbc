//! Integration test: every exported symbol is listed in the version script.
//!
//! Run: cargo test -p ip4addr-abi --test version_script_test

use std::collections::BTreeSet;
use std::path::Path;

fn script_symbols() -> BTreeSet<String> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("version_scripts/ip4addr.map");
    let body = std::fs::read_to_string(path).unwrap();
    let global = body.split("global:").nth(1).unwrap();
    let global = global.split("local:").next().unwrap();
    global
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn source_symbols() -> BTreeSet<String> {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut out = BTreeSet::new();
    for file in ["inet_abi.rs", "addr_abi.rs"] {
        let body = std::fs::read_to_string(src.join(file)).unwrap();
        let mut lines = body.lines().map(str::trim);
        while let Some(line) = lines.next() {
            // `sys_*` symbols are spelled out; helpers go through `abi_fn!`.
            let decl = if line == "#[unsafe(no_mangle)]" {
                lines.next().and_then(|l| l.strip_prefix("pub unsafe extern \"C\" fn "))
            } else if let Some(rest) = line.strip_prefix("fn ") {
                Some(rest)
            } else {
                None
            };
            if let Some(name) = decl.and_then(|d| d.split('(').next()) {
                out.insert(name.to_string());
            }
        }
    }
    out
}

#[test]
fn version_script_matches_exports() {
    let script = script_symbols();
    let source = source_symbols();
    assert_eq!(script.len(), 16);
    assert_eq!(script, source);
}

//! Execute a single fixture case against `ip4addr-core`.
//!
//! Every operation renders its result as text so fixtures can pin exact
//! output. Failed parses and failed renders both render as `fail`.

use ip4addr_core::{Ip4Addr, ParseMode, codec, get_network, netmask_valid};
use serde_json::Value;
use thiserror::Error;

/// Output text for a rejected parse or render.
pub const FAIL: &str = "fail";

/// Errors raised while decoding fixture inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    #[error("unsupported function '{0}'")]
    UnsupportedFunction(String),
    #[error("missing input field '{0}'")]
    MissingField(&'static str),
    #[error("input field '{field}' is malformed: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Run `function` with `inputs` under `mode` and render the result.
///
/// Supported functions: `aton`, `ntoa`, `ntoa_r`, `classify`,
/// `is_loopback`, `get_network`, `netmask_valid`, `make`.
pub fn execute_fixture_case(
    function: &str,
    inputs: &Value,
    mode: ParseMode,
) -> Result<String, ExecError> {
    match function {
        "aton" => {
            let text = str_field(inputs, "text")?;
            Ok(match codec::aton_with(text.as_bytes(), mode) {
                Ok(addr) => addr.to_string(),
                Err(_) => FAIL.to_string(),
            })
        }
        "ntoa" => Ok(codec::ntoa(&addr_field(inputs, "addr")?)),
        "ntoa_r" => {
            let addr = addr_field(inputs, "addr")?;
            let buflen = usize_field(inputs, "buflen")?;
            let mut buf = vec![0u8; buflen];
            Ok(match codec::ntoa_r(&addr, &mut buf) {
                Ok(text) => text.to_string(),
                Err(_) => FAIL.to_string(),
            })
        }
        "classify" => Ok(addr_field(inputs, "addr")?.class().as_str().to_string()),
        "is_loopback" => Ok(addr_field(inputs, "addr")?.is_loopback().to_string()),
        "get_network" => {
            let host = addr_field(inputs, "host")?;
            let mask = addr_field(inputs, "netmask")?;
            Ok(get_network(&host, &mask).to_string())
        }
        "netmask_valid" => Ok(netmask_valid(&addr_field(inputs, "netmask")?).to_string()),
        "make" => {
            let parts = u32_array_field(inputs, "parts")?;
            let [a, b, c, d] = parts;
            Ok(Ip4Addr::from_octets_truncating(a, b, c, d).to_string())
        }
        other => Err(ExecError::UnsupportedFunction(other.to_string())),
    }
}

fn str_field<'a>(inputs: &'a Value, field: &'static str) -> Result<&'a str, ExecError> {
    inputs
        .get(field)
        .ok_or(ExecError::MissingField(field))?
        .as_str()
        .ok_or_else(|| invalid(field, "expected a string"))
}

fn usize_field(inputs: &Value, field: &'static str) -> Result<usize, ExecError> {
    let n = inputs
        .get(field)
        .ok_or(ExecError::MissingField(field))?
        .as_u64()
        .ok_or_else(|| invalid(field, "expected a non-negative integer"))?;
    usize::try_from(n).map_err(|_| invalid(field, "too large"))
}

fn u32_array_field(inputs: &Value, field: &'static str) -> Result<[u32; 4], ExecError> {
    let items = inputs
        .get(field)
        .ok_or(ExecError::MissingField(field))?
        .as_array()
        .ok_or_else(|| invalid(field, "expected an array"))?;
    if items.len() != 4 {
        return Err(invalid(field, format!("expected 4 items, got {}", items.len())));
    }
    let mut out = [0u32; 4];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| invalid(field, "items must be 32-bit unsigned integers"))?;
    }
    Ok(out)
}

/// An address given either as four octets (`[192,168,0,1]`) or as canonical
/// dotted-quad text (`"192.168.0.1"`).
fn addr_field(inputs: &Value, field: &'static str) -> Result<Ip4Addr, ExecError> {
    let value = inputs.get(field).ok_or(ExecError::MissingField(field))?;
    if let Some(text) = value.as_str() {
        return codec::aton_strict(text.as_bytes()).map_err(|e| invalid(field, e.to_string()));
    }
    let parts = u32_array_field(inputs, field)?;
    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(parts) {
        *slot = u8::try_from(part).map_err(|_| invalid(field, "octets must be 0..=255"))?;
    }
    Ok(Ip4Addr::from_octets(octets))
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ExecError {
    ExecError::InvalidField {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(function: &str, inputs: Value) -> String {
        execute_fixture_case(function, &inputs, ParseMode::Legacy).unwrap()
    }

    #[test]
    fn aton_follows_mode() {
        let short = json!({"text": "127.1"});
        assert_eq!(run("aton", short.clone()), "127.0.0.1");
        assert_eq!(
            execute_fixture_case("aton", &short, ParseMode::Strict).unwrap(),
            FAIL
        );
        assert_eq!(run("aton", json!({"text": "1.2.3.256"})), FAIL);
    }

    #[test]
    fn ntoa_r_reports_short_buffers() {
        let inputs = |n: u64| json!({"addr": [255, 255, 255, 255], "buflen": n});
        assert_eq!(run("ntoa_r", inputs(16)), "255.255.255.255");
        assert_eq!(run("ntoa_r", inputs(15)), FAIL);
        assert_eq!(run("ntoa_r", inputs(0)), FAIL);
    }

    #[test]
    fn value_operations_render_text() {
        assert_eq!(run("ntoa", json!({"addr": "10.0.0.1"})), "10.0.0.1");
        assert_eq!(run("classify", json!({"addr": [224, 0, 0, 1]})), "D");
        assert_eq!(run("is_loopback", json!({"addr": [127, 8, 8, 8]})), "true");
        assert_eq!(
            run(
                "get_network",
                json!({"host": [192, 168, 1, 10], "netmask": [255, 255, 255, 0]})
            ),
            "192.168.1.0"
        );
        assert_eq!(run("netmask_valid", json!({"netmask": [255, 255, 0, 255]})), "false");
        assert_eq!(run("make", json!({"parts": [0x1c0, 0x1a8, 0, 1]})), "192.168.0.1");
    }

    #[test]
    fn malformed_inputs_are_errors() {
        let legacy = ParseMode::Legacy;
        assert_eq!(
            execute_fixture_case("memcpy", &json!({}), legacy),
            Err(ExecError::UnsupportedFunction("memcpy".into()))
        );
        assert_eq!(
            execute_fixture_case("aton", &json!({}), legacy),
            Err(ExecError::MissingField("text"))
        );
        assert!(matches!(
            execute_fixture_case("ntoa", &json!({"addr": [1, 2, 3]}), legacy),
            Err(ExecError::InvalidField { field: "addr", .. })
        ));
        assert!(matches!(
            execute_fixture_case("ntoa", &json!({"addr": [1, 2, 3, 256]}), legacy),
            Err(ExecError::InvalidField { field: "addr", .. })
        ));
        assert!(matches!(
            execute_fixture_case("ntoa", &json!({"addr": "1.2"}), legacy),
            Err(ExecError::InvalidField { field: "addr", .. })
        ));
    }
}

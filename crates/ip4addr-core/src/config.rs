//! Parse-mode configuration.
//!
//! The parse mode is set via the `IP4ADDR_PARSE_MODE` environment variable:
//! - `legacy` (default): the historical `inet_aton` grammar. One to four
//!   fields, `0x` hexadecimal and leading-zero octal fields.
//! - `strict`: canonical dotted-quad only. Four decimal fields, no leading
//!   zeros, nothing after the last field.

use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable consulted by [`parse_mode`].
pub const PARSE_MODE_ENV: &str = "IP4ADDR_PARSE_MODE";

/// Grammar accepted by the address parser.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// 1–4 field forms with C numeric-literal radix prefixes.
    #[default]
    Legacy,
    /// Canonical `d.d.d.d` decimal only.
    Strict,
}

impl ParseMode {
    /// Parse from string (case-insensitive). Unknown names fall back to `Legacy`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "canonical" | "dotted-quad" => Self::Strict,
            _ => Self::Legacy,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Strict => "strict",
        }
    }

    /// Returns true if radix prefixes and short forms are accepted.
    #[must_use]
    pub const fn accepts_short_forms(self) -> bool {
        matches!(self, Self::Legacy)
    }
}

// Atomic cache: 0=unresolved, 1=Legacy, 2=Strict, 255=resolving.
static CACHED_MODE: AtomicU8 = AtomicU8::new(0);

const MODE_UNRESOLVED: u8 = 0;
const MODE_LEGACY: u8 = 1;
const MODE_STRICT: u8 = 2;
const MODE_RESOLVING: u8 = 255;

fn mode_to_u8(mode: ParseMode) -> u8 {
    match mode {
        ParseMode::Legacy => MODE_LEGACY,
        ParseMode::Strict => MODE_STRICT,
    }
}

fn u8_to_mode(v: u8) -> ParseMode {
    match v {
        MODE_STRICT => ParseMode::Strict,
        _ => ParseMode::Legacy,
    }
}

/// Get the configured parse mode (reads env var on first call, caches thereafter).
///
/// Concurrent callers that arrive while another thread is resolving the
/// variable get `Legacy` for that call.
#[must_use]
pub fn parse_mode() -> ParseMode {
    let cached = CACHED_MODE.load(Ordering::Relaxed);

    if cached != MODE_UNRESOLVED && cached != MODE_RESOLVING {
        return u8_to_mode(cached);
    }
    if cached == MODE_RESOLVING {
        return ParseMode::Legacy;
    }

    if CACHED_MODE
        .compare_exchange(
            MODE_UNRESOLVED,
            MODE_RESOLVING,
            Ordering::SeqCst,
            Ordering::Relaxed,
        )
        .is_err()
    {
        let v = CACHED_MODE.load(Ordering::Relaxed);
        return if v != MODE_UNRESOLVED && v != MODE_RESOLVING {
            u8_to_mode(v)
        } else {
            ParseMode::Legacy
        };
    }

    let mode = std::env::var(PARSE_MODE_ENV)
        .map(|v| ParseMode::from_str_loose(&v))
        .unwrap_or_default();
    publish_resolved(&CACHED_MODE, mode)
}

/// Store an environment-derived mode unless the cache was pinned meanwhile.
///
/// A `set_parse_mode` that lands during resolution wins over the environment.
fn publish_resolved(cache: &AtomicU8, mode: ParseMode) -> ParseMode {
    match cache.compare_exchange(
        MODE_RESOLVING,
        mode_to_u8(mode),
        Ordering::AcqRel,
        Ordering::Acquire,
    ) {
        Ok(_) => mode,
        Err(pinned) => u8_to_mode(pinned),
    }
}

/// Pin the process-wide parse mode, bypassing the environment.
///
/// Intended for embedders that configure the stack from their own config
/// files rather than the environment.
pub fn set_parse_mode(mode: ParseMode) {
    CACHED_MODE.store(mode_to_u8(mode), Ordering::Release);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mode_names() {
        assert_eq!(ParseMode::from_str_loose("strict"), ParseMode::Strict);
        assert_eq!(ParseMode::from_str_loose("STRICT"), ParseMode::Strict);
        assert_eq!(ParseMode::from_str_loose(" canonical "), ParseMode::Strict);
        assert_eq!(ParseMode::from_str_loose("legacy"), ParseMode::Legacy);
        assert_eq!(ParseMode::from_str_loose("lwip"), ParseMode::Legacy);
        assert_eq!(ParseMode::from_str_loose(""), ParseMode::Legacy);
        assert_eq!(ParseMode::from_str_loose("bogus"), ParseMode::Legacy);
    }

    #[test]
    fn cache_encoding_roundtrips() {
        for mode in [ParseMode::Legacy, ParseMode::Strict] {
            assert_eq!(u8_to_mode(mode_to_u8(mode)), mode);
        }
        assert_eq!(u8_to_mode(MODE_RESOLVING), ParseMode::Legacy);
    }

    #[test]
    fn pin_during_resolution_is_kept() {
        let cache = AtomicU8::new(MODE_RESOLVING);
        cache.store(MODE_STRICT, Ordering::Release);
        assert_eq!(publish_resolved(&cache, ParseMode::Legacy), ParseMode::Strict);
        assert_eq!(cache.load(Ordering::Acquire), MODE_STRICT);
    }

    #[test]
    fn unpinned_resolution_publishes() {
        let cache = AtomicU8::new(MODE_RESOLVING);
        assert_eq!(publish_resolved(&cache, ParseMode::Strict), ParseMode::Strict);
        assert_eq!(cache.load(Ordering::Acquire), MODE_STRICT);
    }

    #[test]
    fn default_is_legacy() {
        assert_eq!(ParseMode::default(), ParseMode::Legacy);
        assert!(ParseMode::Legacy.accepts_short_forms());
        assert!(!ParseMode::Strict.accepts_short_forms());
        assert_eq!(ParseMode::Strict.as_str(), "strict");
    }
}

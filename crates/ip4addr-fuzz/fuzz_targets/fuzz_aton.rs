#![no_main]
use ip4addr_core::{Ip4Addr, codec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let legacy = codec::aton(data);
    let strict = codec::aton_strict(data);

    // Strict is a subset of legacy, and both agree when both accept.
    if let Ok(s) = strict {
        assert_eq!(legacy, Ok(s), "strict accepted what legacy rejected");
    }

    if let Ok(addr) = legacy {
        // Canonical rendering must reparse to the same value in both modes.
        let text = codec::ntoa(&addr);
        assert_eq!(codec::aton(text.as_bytes()), Ok(addr));
        assert_eq!(codec::aton_strict(text.as_bytes()), Ok(addr));
        assert_eq!(text.parse::<std::net::Ipv4Addr>().map(Ip4Addr::from), Ok(addr));
    }
});

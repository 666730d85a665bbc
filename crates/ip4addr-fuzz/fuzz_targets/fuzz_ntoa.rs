#![no_main]
use ip4addr_core::{IP4ADDR_STRLEN_MAX, Ip4Addr, codec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    let addr = Ip4Addr::from_octets([data[0], data[1], data[2], data[3]]);
    let cap = usize::from(data[4]) % (IP4ADDR_STRLEN_MAX + 4);

    let mut buf = vec![0xAAu8; cap];
    let needed = codec::ntoa(&addr).len() + 1;
    match codec::ntoa_r(&addr, &mut buf) {
        Ok(text) => {
            assert!(needed <= cap);
            assert_eq!(text.len() + 1, needed);
            assert_eq!(buf[needed - 1], 0);
        }
        Err(_) => {
            assert!(needed > cap);
            assert!(buf.iter().all(|&b| b == 0xAA));
        }
    }
});

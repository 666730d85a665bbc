//! ABI layer for the address conversion routines.
//!
//! Parsing and rendering are pure compute (no syscalls) and delegate to
//! `ip4addr_core::codec`. Failures are reported as `0` / null returns.

use std::cell::RefCell;
use std::ffi::{CStr, c_char, c_int};
use std::ptr;

use ip4addr_core::addr::IPADDR_NONE;
use ip4addr_core::codec::{self, IP4ADDR_STRLEN_MAX};
use ip4addr_core::Ip4Addr;

// Per-thread render buffer for `sys_ip4addr_ntoa`.
thread_local! {
    static NTOA_BUF: RefCell<[u8; IP4ADDR_STRLEN_MAX]> =
        const { RefCell::new([0; IP4ADDR_STRLEN_MAX]) };
}

// ---------------------------------------------------------------------------
// sys_ip4addr_aton
// ---------------------------------------------------------------------------

/// Parse address text into `*addr` (network order).
///
/// Returns 1 on success, 0 on failure. A null `addr` only validates `cp`.
/// On failure `*addr` is left untouched. The grammar follows the
/// `IP4ADDR_PARSE_MODE` setting.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sys_ip4addr_aton(cp: *const c_char, addr: *mut Ip4Addr) -> c_int {
    if cp.is_null() {
        return 0;
    }

    // SAFETY: caller passes a NUL-terminated string.
    let src = unsafe { CStr::from_ptr(cp) }.to_bytes();
    match codec::aton_configured(src) {
        Ok(parsed) => {
            if !addr.is_null() {
                // SAFETY: non-null and points to caller-owned `ip4_addr` storage.
                unsafe { addr.write(parsed) };
            }
            1
        }
        Err(_) => 0,
    }
}

// ---------------------------------------------------------------------------
// sys_ipaddr_addr
// ---------------------------------------------------------------------------

/// Parse address text to a network-order `u32`.
///
/// Returns `IPADDR_NONE` (0xFFFFFFFF) on error, which cannot be told apart
/// from a successful parse of `255.255.255.255`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sys_ipaddr_addr(cp: *const c_char) -> u32 {
    let mut out = Ip4Addr::ANY;
    // SAFETY: forwarded caller contract; `out` is a live local.
    if unsafe { sys_ip4addr_aton(cp, &mut out) } == 1 {
        out.raw()
    } else {
        IPADDR_NONE
    }
}

// ---------------------------------------------------------------------------
// sys_ip4addr_ntoa_r
// ---------------------------------------------------------------------------

/// Render `*addr` as NUL-terminated dotted-decimal text into `buf`.
///
/// Returns `buf` on success. Returns null without writing when any pointer
/// is null, `buflen` is not positive, or `buflen` cannot hold the text plus
/// its terminator.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sys_ip4addr_ntoa_r(
    addr: *const Ip4Addr,
    buf: *mut c_char,
    buflen: c_int,
) -> *mut c_char {
    if addr.is_null() || buf.is_null() {
        return ptr::null_mut();
    }
    let capacity = match usize::try_from(buflen) {
        Ok(n) if n > 0 => n,
        _ => return ptr::null_mut(),
    };

    // SAFETY: non-null; caller guarantees `buf` is valid for `buflen` bytes.
    let (addr, dst) = unsafe {
        (
            *addr,
            std::slice::from_raw_parts_mut(buf.cast::<u8>(), capacity),
        )
    };
    match codec::ntoa_r(&addr, dst) {
        Ok(_) => buf,
        Err(_) => ptr::null_mut(),
    }
}

// ---------------------------------------------------------------------------
// sys_ip4addr_ntoa
// ---------------------------------------------------------------------------

/// Render `*addr` into a per-thread buffer.
///
/// The returned text stays valid until the next call on the same thread.
/// Other threads have their own buffer. Returns null for a null `addr`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sys_ip4addr_ntoa(addr: *const Ip4Addr) -> *mut c_char {
    if addr.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: non-null and points to a caller-owned `ip4_addr`.
    let addr = unsafe { *addr };

    NTOA_BUF.with(|cell| {
        let mut buf = cell.borrow_mut();
        match codec::ntoa_r(&addr, &mut buf[..]) {
            Ok(_) => buf.as_mut_ptr().cast::<c_char>(),
            Err(_) => ptr::null_mut(),
        }
    })
}

//! 32-bit FNV-1a hashing of job titles.
//!
//! A job's identifier is derived from its title alone, so host and plugin
//! agree on the id without prior coordination.

const FNV_32_INIT: u32 = 0x811c_9dc5;
const FNV_32_PRIME: u32 = 0x0100_0193;

/// Hash a job title into its 32-bit identifier.
///
/// FNV-1a applied per UTF-16 code unit in input order, with wrapping 32-bit
/// arithmetic. Hashing code units rather than code points keeps identifiers
/// interoperable with hosts that hash titles the same way; titles outside
/// the basic multilingual plane contribute two units each. Deterministic
/// across processes and runs. The empty string hashes to the initial
/// constant.
pub fn fnv32a(s: &str) -> u32 {
    let mut acc = FNV_32_INIT;
    for unit in s.encode_utf16() {
        acc ^= u32::from(unit);
        acc = acc.wrapping_mul(FNV_32_PRIME);
    }
    acc
}

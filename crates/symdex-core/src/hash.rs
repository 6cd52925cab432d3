/// Multiplier applied to the accumulator before each byte is added.
pub const HASH_MULTIPLIER: u16 = 17;

/// Symbol hash shared by the generator and the runtime that walks the table.
///
/// `acc = acc * 17 + byte`, wrapping at 16 bits. The runtime recomputes this
/// independently, so it must not change.
pub const fn hash(bytes: &[u8]) -> u16 {
    let mut acc: u16 = 0;
    let mut i = 0;
    while i < bytes.len() {
        acc = acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(bytes[i] as u16);
        i += 1;
    }
    acc
}

pub const fn hash_str(name: &str) -> u16 {
    hash(name.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_hashes_to_zero() {
        assert_eq!(hash(b""), 0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(hash_str("new"), 0x835a);
        assert_eq!(hash_str("class"), 0xb966);
        assert_eq!(hash_str("to_s"), 0x3645);
        assert_eq!(hash_str("Object"), 0xdf37);
    }

    #[test]
    fn test_wraps_at_sixteen_bits() {
        let long = "each_with_index".repeat(8);
        let expected = long
            .bytes()
            .fold(0u32, |acc, b| (acc * 17 + b as u32) % 65536);
        assert_eq!(hash_str(&long) as u32, expected);
    }

    #[test]
    fn test_stable_across_calls() {
        for name in ["+", "[]=", "block_given?", "MRUBYC_VERSION"] {
            assert_eq!(hash_str(name), hash_str(name));
        }
    }

    #[test]
    fn test_usable_in_const_context() {
        const NEW: u16 = hash_str("new");
        assert_eq!(NEW, 0x835a);
    }
}

use std::collections::HashSet;

use symdex_core::hash_str;

/// Two names engineered to share the hash `0x06d3`.
pub const COLLIDING_PAIR: (&str, &str) = ("ab", "bQ");

/// Build a different name with the same hash as `name`.
///
/// Adding one to the second-to-last byte adds 17 to the hash, which is undone
/// by taking 17 from the last byte. Returns `None` when either byte would
/// leave printable ASCII.
pub fn collide_with(name: &str) -> Option<String> {
    let bytes = name.as_bytes();
    let [.., head, tail] = bytes else {
        return None;
    };
    let head = head.checked_add(1).filter(|b| b.is_ascii_graphic())?;
    let tail = tail.checked_sub(17).filter(|b| b.is_ascii_graphic())?;

    let mut out = bytes[..bytes.len() - 2].to_vec();
    out.push(head);
    out.push(tail);
    String::from_utf8(out).ok()
}

/// `count` distinct, collision-free names, in a scrambled but fixed order.
pub fn synthetic_vocabulary(count: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(count);
    let mut i: u64 = 0;
    while names.len() < count {
        // Multiplicative scramble so input order is not hash order.
        let key = i.wrapping_mul(2_654_435_761) % 1_000_003;
        let name = format!("sym_{key}");
        if seen.insert(hash_str(&name)) {
            names.push(name);
        }
        i += 1;
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colliding_pair() {
        assert_eq!(hash_str(COLLIDING_PAIR.0), hash_str(COLLIDING_PAIR.1));
    }

    #[test]
    fn test_collide_with() {
        let twin = collide_with("class").unwrap();
        assert_ne!(twin, "class");
        assert_eq!(hash_str(&twin), hash_str("class"));
        assert_eq!(collide_with("p"), None);
    }

    #[test]
    fn test_synthetic_vocabulary_is_collision_free() {
        let names = synthetic_vocabulary(200);
        let hashes: HashSet<_> = names.iter().map(|name| hash_str(name)).collect();
        assert_eq!(hashes.len(), 200);
    }
}

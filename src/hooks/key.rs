//! Addresses hooks are registered at.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::engine::Reg;

/// Code address a hook is attached to.
///
/// The key is the program counter at which the hook fires: the code segment
/// and the byte offset within it. A key hit only says that *some* instruction
/// lives at this address in the loaded image; the hook's fingerprint decides
/// whether it is the intended one.
///
/// # Hashing
///
/// Both fields are packed into disjoint halves of one `u64`
/// ([`HookKey::hash64`]), so distinct keys never produce the same hash value.
///
/// # Example
///
/// ```rust
/// use scihooks::{engine::Reg, hooks::HookKey};
///
/// let key = HookKey::new(0x0018, 0x144d);
/// assert_eq!(key.hash64(), 0x0000_0018_0000_144d);
/// assert_eq!(HookKey::from(Reg::new(0x0018, 0x144d)), key);
/// assert_eq!(key.to_string(), "0018:144d");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HookKey {
    /// Code segment.
    pub segment: u32,
    /// Byte offset within the segment.
    pub offset: u32,
}

impl HookKey {
    /// Creates a key from a segment and an offset.
    #[must_use]
    pub const fn new(segment: u32, offset: u32) -> Self {
        HookKey { segment, offset }
    }

    /// Packs the key into a single 64-bit value, segment in the high half.
    #[must_use]
    pub const fn hash64(&self) -> u64 {
        ((self.segment as u64) << 32) | self.offset as u64
    }
}

impl Hash for HookKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash64());
    }
}

impl From<Reg> for HookKey {
    fn from(pc: Reg) -> Self {
        HookKey::new(u32::from(pc.segment()), pc.offset())
    }
}

impl fmt::Debug for HookKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HookKey({:04x}:{:04x})", self.segment, self.offset)
    }
}

impl fmt::Display for HookKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}", self.segment, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;

    #[test]
    fn test_hash_fields_do_not_overlap() {
        let pairs = [
            (0, 0),
            (0, 1),
            (1, 0),
            (1, 1),
            (0, u32::MAX),
            (u32::MAX, 0),
            (u32::MAX, u32::MAX),
            (0x18, 0x144d),
            (0x144d, 0x18),
        ];
        let hashes: HashSet<u64> = pairs
            .iter()
            .map(|&(segment, offset)| HookKey::new(segment, offset).hash64())
            .collect();
        assert_eq!(hashes.len(), pairs.len());
    }

    #[test]
    fn test_hash_unpacks() {
        let key = HookKey::new(0xdead_beef, 0x0123_4567);
        let packed = key.hash64();
        assert_eq!((packed >> 32) as u32, key.segment);
        assert_eq!(packed as u32, key.offset);
    }

    #[test]
    fn test_equality_needs_both_fields() {
        let key = HookKey::new(0x18, 0x144d);
        assert_eq!(key, HookKey::new(0x18, 0x144d));
        assert_ne!(key, HookKey::new(0x19, 0x144d));
        assert_ne!(key, HookKey::new(0x18, 0x144e));
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut map = HashMap::new();
        map.insert(HookKey::new(0x18, 0x144d), "ice");
        map.insert(HookKey::new(0x01, 0x199e), "extern");

        assert_eq!(map.get(&HookKey::new(0x18, 0x144d)), Some(&"ice"));
        assert_eq!(map.get(&HookKey::new(0x144d, 0x18)), None);
    }

    #[test]
    fn test_from_pc() {
        let key = HookKey::from(Reg::new(0x0001, 0x199e));
        assert_eq!(key, HookKey::new(1, 0x199e));
    }
}

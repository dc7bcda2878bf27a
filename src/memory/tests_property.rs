//! Property-based tests for memory bounds and image loading.

use super::*;
use proptest::prelude::*;

proptest! {
    // Every in-range cell is independently readable and writable.
    #[test]
    fn prop_write_then_read(addr in any::<u16>(), val in any::<u8>()) {
        let mut memory = Memory::default();
        memory.write(addr, val).unwrap();
        prop_assert_eq!(memory.read(addr).unwrap(), val);
    }

    // Writes do not alias other cells.
    #[test]
    fn prop_write_is_local(a in any::<u16>(), b in any::<u16>(), val in 1u8..=255) {
        prop_assume!(a != b);
        let mut memory = Memory::default();
        memory.write(a, val).unwrap();
        prop_assert_eq!(memory.read(b).unwrap(), 0);
    }

    // Accesses at or beyond the configured size always error.
    #[test]
    fn prop_out_of_range_is_error(addr in 0x100u16..) {
        let mut memory = Memory::new(0x100);
        prop_assert!(memory.read(addr).is_err());
        prop_assert!(memory.write(addr, 0xFF).is_err());
    }

    // A loaded image reads back byte for byte.
    #[test]
    fn prop_load_roundtrip(origin in 0u16..0x8000, image in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut memory = Memory::default();
        memory.load(origin, &image).unwrap();
        for (i, &byte) in image.iter().enumerate() {
            prop_assert_eq!(memory.read(origin + i as u16).unwrap(), byte);
        }
    }
}

//! Property tests for base-36 short key rendering.

use proptest::prelude::*;
use shortlink::{as_characters, ALPHABET_SIZE};

proptest! {
    #[test]
    fn digits_are_the_low_part_of_the_number(number in any::<u64>(), len in 1usize..14) {
        let key = as_characters(number, len);
        prop_assert!(!key.is_empty() && key.len() <= len);

        let parsed = u64::from_str_radix(&key, ALPHABET_SIZE).unwrap();
        let modulus = u64::from(ALPHABET_SIZE).checked_pow(len as u32);
        let expected = match modulus {
            Some(m) => number % m,
            None => number,
        };
        prop_assert_eq!(parsed, expected);
    }
}

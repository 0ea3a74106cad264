use ac::{decode, encode, ArithmeticEncoder, FrequencyModel, ALPHABET_SIZE, MAX_FREQUENCY};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_roundtrip(input in prop::collection::vec(any::<u8>(), 0..2000)) {
        let encoded = encode(&input);
        let decoded = decode(&encoded).unwrap();
        prop_assert_eq!(input, decoded);
    }

    #[test]
    fn test_roundtrip_skewed(
        input in prop::collection::vec(prop::sample::select(vec![0u8, 1, b'a', 0xFF]), 0..3000),
    ) {
        let encoded = encode(&input);
        prop_assert_eq!(decode(&encoded).unwrap(), input);
    }

    #[test]
    fn test_encoding_is_deterministic(input in prop::collection::vec(any::<u8>(), 0..500)) {
        prop_assert_eq!(encode(&input), encode(&input));
    }

    #[test]
    fn test_model_table_invariants_during_pass(
        input in prop::collection::vec(any::<u8>(), 0..400),
    ) {
        let mut encoder = ArithmeticEncoder::new();
        for &b in &input {
            encoder.encode_byte(b);
            let table = encoder.model().cumulative();
            prop_assert_eq!(table[0], 0);
            prop_assert!(table.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(table[ALPHABET_SIZE], encoder.model().total());
            prop_assert!(encoder.model().total() <= MAX_FREQUENCY);
        }
    }

    #[test]
    fn test_frozen_model_is_stable(symbols in prop::collection::vec(0u16..=256, 1..200)) {
        let mut model = FrequencyModel::new();
        while !model.is_frozen() {
            model.probability_for_symbol(0).unwrap();
        }
        let snapshot = model.cumulative().to_vec();
        for &s in &symbols {
            model.probability_for_symbol(s).unwrap();
        }
        prop_assert_eq!(model.cumulative(), &snapshot[..]);
        prop_assert_eq!(model.total(), MAX_FREQUENCY);
    }
}

//! Property-based tests using proptest

use keycraft_core::{
    enumerate, estimate::words_for_length, Alphabet, Error, Estimate, FnSink, LengthRange,
    MemorySink, Odometer,
};
use proptest::prelude::*;
use std::collections::HashSet;
use std::io;

/// Alphabets of 1..=5 distinct characters drawn from a mixed pool
fn alphabet_strategy() -> impl Strategy<Value = Alphabet> {
    proptest::sample::subsequence(vec!['a', 'Z', '7', '!', 'é', '日'], 1..=5)
        .prop_shuffle()
        .prop_map(|chars| Alphabet::new(chars).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_count_uniqueness_and_membership(
        alphabet in alphabet_strategy(),
        length in 1usize..=4
    ) {
        let mut sink = MemorySink::new();
        let outcome = enumerate(
            LengthRange::single(length).unwrap(),
            alphabet.clone(),
            &mut sink,
        )
        .unwrap();

        let expected = words_for_length(alphabet.len(), length).unwrap() as usize;
        prop_assert_eq!(sink.words().len(), expected);
        prop_assert_eq!(outcome.words as usize, expected);

        let distinct: HashSet<&String> = sink.words().iter().collect();
        prop_assert_eq!(distinct.len(), expected);

        for word in sink.words() {
            prop_assert_eq!(word.chars().count(), length);
            prop_assert!(word.chars().all(|c| alphabet.contains(c)));
        }
    }

    #[test]
    fn test_carry_matches_integer_to_digits(
        alphabet in alphabet_strategy(),
        length in 1usize..=4
    ) {
        let mut sink = MemorySink::new();
        enumerate(LengthRange::single(length).unwrap(), alphabet.clone(), &mut sink).unwrap();

        for (index, word) in sink.words().iter().enumerate() {
            let odometer = Odometer::from_index(length, alphabet.len(), index as u128).unwrap();
            prop_assert_eq!(&odometer.word(&alphabet), word);
        }
    }

    #[test]
    fn test_order_is_lexicographic_by_digit(
        alphabet in alphabet_strategy(),
        length in 1usize..=3
    ) {
        let mut sink = MemorySink::new();
        enumerate(LengthRange::single(length).unwrap(), alphabet.clone(), &mut sink).unwrap();

        let keys: Vec<Vec<usize>> = sink
            .words()
            .iter()
            .map(|w| w.chars().map(|c| alphabet.index_of(c).unwrap()).collect())
            .collect();
        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_sink_failure_after_n_minus_one(
        fail_at in 1u64..=30,
        max_length in 1usize..=4
    ) {
        let mut calls = 0u64;
        let mut sink = FnSink(|_: &str| -> io::Result<()> {
            calls += 1;
            if calls == fail_at {
                Err(io::Error::other("rejected"))
            } else {
                Ok(())
            }
        });

        let total = Estimate::compute(
            &LengthRange::new(1, max_length).unwrap(),
            &"abc".parse().unwrap(),
        )
        .words
        .unwrap() as u64;

        let result = enumerate(
            LengthRange::new(1, max_length).unwrap(),
            "abc".parse().unwrap(),
            &mut sink,
        );
        drop(sink);

        if fail_at <= total {
            match result {
                Err(Error::SinkFailure { delivered, .. }) => {
                    prop_assert_eq!(delivered, fail_at - 1);
                }
                other => {
                    prop_assert!(false, "expected sink failure, got {:?}", other);
                }
            }
            prop_assert_eq!(calls, fail_at);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(calls, total);
        }
    }

    #[test]
    fn test_estimate_matches_output(
        alphabet in alphabet_strategy(),
        min in 1usize..=3,
        extra in 0usize..=1
    ) {
        let range = LengthRange::new(min, min + extra).unwrap();
        let estimate = Estimate::compute(&range, &alphabet);

        let mut sink = MemorySink::new();
        enumerate(range, alphabet, &mut sink).unwrap();

        let bytes: usize = sink.words().iter().map(|w| w.len() + 1).sum();
        prop_assert_eq!(estimate.words, Some(sink.words().len() as u128));
        prop_assert_eq!(estimate.bytes, Some(bytes as u128));
    }

    #[test]
    fn test_invalid_ranges_rejected(min in 0usize..6, max in 0usize..6) {
        let result = LengthRange::new(min, max);
        let valid = min >= 1 && max >= 1 && min <= max;
        prop_assert_eq!(result.is_ok(), valid);
    }
}

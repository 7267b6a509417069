// Property tests: chunking never changes the digest or the forwarded bytes

use bytes::Bytes;
use hashfilter::{Algorithm, FilterConfig, FilterResult, HashContext, HashFilter};
use proptest::prelude::*;

/// Splits `data` at the given cut points (taken modulo the length, sorted).
fn partition(data: &[u8], cuts: &[usize]) -> Vec<Bytes> {
    let mut points: Vec<usize> = cuts
        .iter()
        .map(|c| if data.is_empty() { 0 } else { c % (data.len() + 1) })
        .collect();
    points.push(0);
    points.push(data.len());
    points.sort_unstable();

    points
        .windows(2)
        .map(|w| Bytes::copy_from_slice(&data[w[0]..w[1]]))
        .collect()
}

proptest! {
    #[test]
    fn prop_streaming_equivalence(
        data in proptest::collection::vec(any::<u8>(), 0..2048),
        cuts in proptest::collection::vec(any::<usize>(), 0..16),
    ) {
        let chunks = partition(&data, &cuts);

        for &algo in Algorithm::supported() {
            let result = FilterResult::new();
            let mut filter = HashFilter::create(&FilterConfig::new(algo.name()), result.clone()).unwrap();
            for chunk in &chunks {
                filter.process(chunk.clone()).unwrap();
            }
            let digest = filter.close().unwrap();

            prop_assert_eq!(&digest, &algo.digest(&data));
            prop_assert_eq!(result.digest(), Some(digest));
        }
    }

    #[test]
    fn prop_pass_through_and_accounting(
        data in proptest::collection::vec(any::<u8>(), 0..2048),
        cuts in proptest::collection::vec(any::<usize>(), 0..16),
    ) {
        let chunks = partition(&data, &cuts);
        let mut filter = HashFilter::create(&FilterConfig::new("sha256"), FilterResult::new()).unwrap();

        let mut emitted = Vec::with_capacity(data.len());
        let mut expected_consumed = 0u64;
        for chunk in chunks {
            expected_consumed += chunk.len() as u64;
            emitted.extend_from_slice(&filter.process(chunk).unwrap().into_bytes());
            prop_assert_eq!(filter.consumed(), expected_consumed);
        }

        prop_assert_eq!(emitted, data);
    }

    #[test]
    fn prop_context_split_equivalence(
        x in proptest::collection::vec(any::<u8>(), 0..512),
        y in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        for &algo in Algorithm::supported() {
            let mut split = HashContext::new(algo);
            split.update(&x);
            split.update(&y);

            let mut whole = HashContext::new(algo);
            whole.update(&[x.as_slice(), y.as_slice()].concat());

            prop_assert_eq!(split.finalize(), whole.finalize());
        }
    }
}

#![no_main]

use bytes::Bytes;
use hashfilter::{Algorithm, FilterConfig, FilterResult, HashFilter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    // First byte picks the chunk size, the rest is the stream
    let Some((&step, payload)) = data.split_first() else {
        return;
    };
    let step = usize::from(step).max(1);

    for &algo in Algorithm::supported() {
        let result = FilterResult::new();
        let mut filter = HashFilter::create(&FilterConfig::new(algo.name()), result.clone()).unwrap();

        // Verify: every chunk is forwarded unchanged
        let mut emitted = Vec::with_capacity(payload.len());
        for chunk in payload.chunks(step) {
            let out = filter.process(Bytes::copy_from_slice(chunk)).unwrap();
            assert_eq!(out.as_bytes(), chunk);
            emitted.extend_from_slice(out.as_bytes());
        }
        assert_eq!(emitted, payload);

        // Verify: byte accounting
        assert_eq!(filter.consumed(), payload.len() as u64);

        // Verify: chunked digest equals one-shot digest
        let digest = filter.close().unwrap();
        assert_eq!(digest, algo.digest(payload));
        assert_eq!(result.digest(), Some(digest));

        // Verify: close is single-shot
        assert!(filter.close().is_err());
    }
});

#![no_main]

use std::io::{Cursor, Read, Write};

use hashfilter::{Algorithm, Direction, FilterConfig, append_filter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    // Read side, odd buffer size
    let config = FilterConfig::new("sha256").with_direction(Direction::Read);
    let (mut stream, result) = append_filter(Cursor::new(data.clone()), &config).unwrap();
    let mut out = Vec::new();
    let mut buf = [0u8; 13];
    loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
    }
    stream.finish().unwrap();
    assert_eq!(out, data);
    assert_eq!(result.digest(), Some(Algorithm::Sha256.digest(&data)));

    // Write side
    let (mut stream, _) = append_filter(Vec::new(), &FilterConfig::new("sha256")).unwrap();
    stream.write_all(&data).unwrap();
    let (written, digest) = stream.finish().unwrap();
    assert_eq!(written, data);
    assert_eq!(digest, Algorithm::Sha256.digest(&data));
});

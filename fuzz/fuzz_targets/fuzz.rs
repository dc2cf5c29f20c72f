#![no_main]

use libfuzzer_sys::fuzz_target;
use lzhv::{Params, Strategy, compress, decompress, decompress_strict};

/// The lenient decoder must accept any byte string without panicking, and
/// must emit one literal per complete record at minimum.
fn verify_decompression_robustness(data: &[u8]) {
    let mut output = Vec::new();
    decompress(data, &mut output);
    assert!(output.len() >= data.len() / lzhv::TOKEN_SIZE);

    // Strict decoding may fail, but never panic.
    let mut strict = Vec::new();
    let _ = decompress_strict(data, &mut strict);
}

/// `decompress(compress(data)) == data` for both match finders, with window
/// and lookahead taken from the first input bytes.
fn verify_round_trip(data: &[u8]) {
    let params = match data {
        [w0, w1, l, ..] => Params::new(u16::from_le_bytes([*w0, *w1]), (*l).max(1)),
        _ => Params::default(),
    };

    for strategy in Strategy::ALL {
        let compressed = compress(data, params, strategy);

        let mut decompressed = Vec::new();
        if let Err(e) = decompress_strict(&compressed.data, &mut decompressed) {
            panic!("{strategy}: strict decoder rejected encoder output: {e:?}");
        }
        if decompressed != data {
            panic!(
                "{strategy}: round-trip mismatch!\nInput len: {}\nCompressed len: {}\nDecompressed len: {}",
                data.len(),
                compressed.data.len(),
                decompressed.len()
            );
        }
    }
}

fuzz_target!(|data: &[u8]| {
    verify_decompression_robustness(data);
    verify_round_trip(data);
});

#![no_main]
use bumpfmt_core::{BigEndian, FailurePolicy, LittleEndian, write_with_policy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let buffer_len = usize::from(data[0] % 24);
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&data[1..9]);
    let value = u64::from_le_bytes(raw);

    let mut buf = vec![0u8; buffer_len];
    let result = write_with_policy(
        FailurePolicy::Leave,
        &mut buf,
        b"{}{}",
        &[&BigEndian(value), &LittleEndian(value)],
    );
    match result {
        Ok(n) => {
            assert_eq!(n, 16);
            let mut le = buf[8..16].to_vec();
            le.reverse();
            assert_eq!(&buf[..8], &le[..]);
        }
        Err(e) => {
            assert!(buffer_len < 16);
            assert!(e.is_out_of_bounds());
        }
    }
});

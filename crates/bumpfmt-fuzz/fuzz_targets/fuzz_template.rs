#![no_main]
use bumpfmt_core::{FailurePolicy, Format, placeholder_count, upper_bound, write_with_policy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Layout: [buffer_len, arg_count, template...]
    if data.len() < 2 {
        return;
    }
    let buffer_len = usize::from(data[0]);
    let arg_count = usize::from(data[1] % 8);
    let template = &data[2..];

    let values: Vec<u64> = (0..arg_count as u64).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
    let args: Vec<&dyn Format> = values.iter().map(|v| v as &dyn Format).collect();

    // Should never panic regardless of input
    let mut buf = vec![0xA5u8; buffer_len];
    let leave = write_with_policy(FailurePolicy::Leave, &mut buf, template, &args);
    if let Ok(n) = leave {
        assert!(n <= buffer_len);
        assert_eq!(placeholder_count(template), arg_count);
        assert!(n <= upper_bound(template, &args));
    }

    let mut scrubbed = vec![0xA5u8; buffer_len];
    let scrub = write_with_policy(FailurePolicy::Scrub, &mut scrubbed, template, &args);
    assert_eq!(leave, scrub);
    match scrub {
        Ok(n) => assert_eq!(&buf[..n], &scrubbed[..n]),
        Err(_) => assert!(scrubbed.iter().all(|&b| b == 0)),
    }
});

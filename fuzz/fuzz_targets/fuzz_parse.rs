#![no_main]
use libfuzzer_sys::fuzz_target;

use fixint_bignum::BigInt;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let radix = 2 + (data[0] % 35) as u32;
    if let Ok(s) = std::str::from_utf8(&data[1..]) {
        if let Ok(n) = BigInt::from_str_radix(s, radix) {
            // A successful parse must survive the round trip.
            let printed = n.to_string_radix(radix).unwrap();
            assert_eq!(BigInt::from_str_radix(&printed, radix).unwrap(), n);
        }
        if let Ok(n) = BigInt::from_hex_str(s) {
            assert_eq!(BigInt::from_hex_str(&n.to_hex_string()).unwrap(), n);
        }
    }
    let _ = BigInt::from_bytes_be(&data[1..]);
});

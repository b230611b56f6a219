#![no_main]
use libfuzzer_sys::fuzz_target;

use fixint_bignum::BigInt;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let split = 1 + (data[0] as usize % (data.len() - 1));
    let a = match BigInt::from_bytes_be(&data[1..split]) {
        Ok(v) => v,
        Err(_) => return,
    };
    let b = match BigInt::from_bytes_be(&data[split..]) {
        Ok(v) => v,
        Err(_) => return,
    };

    if let Ok(sum) = a.add(&b) {
        assert_eq!(sum.sub(&b).unwrap(), a);
    }
    if !b.is_zero() {
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.mul(&b).unwrap().add(&r).unwrap(), a);
    }
    assert_eq!(a.complement().complement(), a);
    let sqrt = a.sqrt().unwrap();
    assert!(sqrt.mul(&sqrt).unwrap() <= a);
});

#![no_main]

use gaussgrid_core::GaussianInteger;
use gaussgrid_core::rational::is_prime;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|coords: (i32, i32)| {
    let (a, b) = coords;
    let z = GaussianInteger::new(a, b);
    let norm = z.norm();
    assert_eq!(
        i128::from(norm),
        i128::from(a) * i128::from(a) + i128::from(b) * i128::from(b)
    );

    let prime = z.is_prime();
    assert_eq!(z.is_prime(), prime);
    if is_prime(norm) {
        assert!(prime);
    }
});

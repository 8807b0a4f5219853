#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use liftdwt::{Cdf97Executor, LiftDwt};

#[derive(Arbitrary, Debug)]
struct Data {
    length: u8,
}

fuzz_target!(|data: Data| {
    let mut signal = vec![0.; data.length as usize];
    for i in 0..data.length as usize {
        signal[i] = i as f64 / data.length as f64;
    }
    let executor = LiftDwt::make_cdf97_f64();
    let dwt = executor.dwt(&signal).unwrap();
    let restored = executor.idwt(&dwt).unwrap();
    assert_eq!(restored.len(), signal.len());
});

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use liftdwt::{Acceleration, Cdf97Executor, DwtConfig, LiftDwt};

#[derive(Arbitrary, Debug)]
struct Data {
    length: u8,
    banked: bool,
}

fuzz_target!(|data: Data| {
    let mut signal = vec![0.; data.length as usize];
    for i in 0..data.length as usize {
        signal[i] = i as f32 / data.length as f32;
    }
    let acceleration = if data.banked {
        Acceleration::Banked
    } else {
        Acceleration::Scalar
    };
    let executor = LiftDwt::make_cdf97_f32_with(
        DwtConfig::default()
            .with_acceleration(acceleration)
            .with_threads(1),
    );
    let dwt = executor.dwt(&signal).unwrap();
    _ = executor.idwt(&dwt).unwrap();
});

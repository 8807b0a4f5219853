#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use liftdwt::{
    Acceleration, DecompositionOptions, DwtConfig, Extent, Image, LiftDwt,
    MultiResolutionExecutor,
};

#[derive(Arbitrary, Debug)]
struct Data {
    width: u8,
    height: u8,
    levels: Option<u8>,
    decompose_to_pixel: bool,
    banked: bool,
}

fuzz_target!(|data: Data| {
    let outer = Extent::new(data.width as usize, data.height as usize);
    let options = DecompositionOptions {
        levels: data.levels.map(|l| l as usize),
        decompose_to_pixel: data.decompose_to_pixel,
        zero_padding: true,
    };
    let acceleration = if data.banked {
        Acceleration::Banked
    } else {
        Acceleration::Scalar
    };
    let mut image = Image::<f32>::new(outer).unwrap();
    image.fill_test_pattern(outer, 1).unwrap();
    let executor =
        LiftDwt::make_cdf97_f32_with(DwtConfig::default().with_acceleration(acceleration));
    executor
        .forward_2d(&mut image.as_plane_mut().unwrap(), outer, options)
        .unwrap();
    executor
        .inverse_2d(&mut image.as_plane_mut().unwrap(), outer, options)
        .unwrap();
});

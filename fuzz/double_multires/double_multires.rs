#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use liftdwt::{DecompositionOptions, Extent, Image, LiftDwt, MultiResolutionExecutor};

#[derive(Arbitrary, Debug)]
struct Data {
    width: u8,
    height: u8,
    inner_width: u8,
    inner_height: u8,
    levels: Option<u8>,
    decompose_to_pixel: bool,
    zero_padding: bool,
}

fuzz_target!(|data: Data| {
    let outer = Extent::new(data.width as usize, data.height as usize);
    let inner = Extent::new(
        data.inner_width.min(data.width) as usize,
        data.inner_height.min(data.height) as usize,
    );
    let options = DecompositionOptions {
        levels: data.levels.map(|l| l as usize),
        decompose_to_pixel: data.decompose_to_pixel,
        zero_padding: data.zero_padding,
    };
    let mut image = Image::<f64>::new(outer).unwrap();
    image.fill_test_pattern(inner, 0).unwrap();
    let original = image.clone();
    let executor = LiftDwt::make_cdf97_f64();
    executor
        .forward_2d(&mut image.as_plane_mut().unwrap(), inner, options)
        .unwrap();
    executor
        .inverse_2d(&mut image.as_plane_mut().unwrap(), inner, options)
        .unwrap();
    assert!(image.compare(&original, inner).unwrap());
});

#![cfg(feature = "render")]

use image::Rgba;
use sudoku_store_assets::gradient::{interpolate, Gradient};

const INDIGO: Rgba<u8> = Rgba([79, 70, 229, 255]);
const BLUE: Rgba<u8> = Rgba([37, 99, 235, 255]);

#[test]
fn endpoints_are_exact_after_rounding() {
    assert_eq!(interpolate(INDIGO, BLUE, 0.0), INDIGO);
    assert_eq!(interpolate(INDIGO, BLUE, 1.0), BLUE);

    // Alpha interpolates like any other channel.
    let translucent = Rgba([255, 255, 255, 51]);
    let opaque = Rgba([0, 0, 0, 255]);
    assert_eq!(interpolate(translucent, opaque, 0.0)[3], 51);
    assert_eq!(interpolate(translucent, opaque, 1.0)[3], 255);
}

#[test]
fn out_of_range_ratios_clamp_instead_of_failing() {
    assert_eq!(interpolate(INDIGO, BLUE, -5.0), interpolate(INDIGO, BLUE, 0.0));
    assert_eq!(interpolate(INDIGO, BLUE, 5.0), interpolate(INDIGO, BLUE, 1.0));
    assert_eq!(interpolate(INDIGO, BLUE, -0.001), INDIGO);
    assert_eq!(interpolate(INDIGO, BLUE, 1.001), BLUE);
}

#[test]
fn every_channel_moves_monotonically_toward_the_far_endpoint() {
    let a = Rgba([200, 10, 128, 255]);
    let b = Rgba([20, 240, 128, 0]);

    let mut previous = interpolate(a, b, 0.0);
    for step in 1..=100 {
        let current = interpolate(a, b, step as f32 / 100.0);
        assert!(current[0] <= previous[0], "red oscillated at step {step}");
        assert!(current[1] >= previous[1], "green oscillated at step {step}");
        assert_eq!(current[2], 128, "constant channel drifted at step {step}");
        assert!(current[3] <= previous[3], "alpha oscillated at step {step}");
        previous = current;
    }
}

#[test]
fn gradient_wrapper_matches_the_free_function() {
    let gradient = Gradient {
        start: INDIGO,
        end: BLUE,
    };
    for step in 0..=10 {
        let ratio = step as f32 / 10.0;
        assert_eq!(gradient.at(ratio), interpolate(INDIGO, BLUE, ratio));
    }
}

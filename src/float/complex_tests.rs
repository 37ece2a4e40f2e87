use super::*;
use num_complex::Complex64;

fn assert_complex_close(val: Complex64, expected: Complex64) {
    let tolerance = 1e-9;
    let diff = (val - expected).l1_norm();
    assert!(
        diff < tolerance,
        "Error. Expected: {}, Got: {}", expected, val
    );
}

fn sample_input() -> [Complex64; 8] {
    [
        Complex64::new(1.0, 2.0),
        Complex64::new(3.0, 4.0),
        Complex64::new(5.0, 6.0),
        Complex64::new(7.0, 8.0),
        Complex64::new(-8.0, -7.0),
        Complex64::new(-6.0, -5.0),
        Complex64::new(-4.0, -3.0),
        Complex64::new(-2.0, -1.0),
    ]
}

#[test]
fn test_fft_roundtrip() {
    let input = sample_input();

    let expected_fft = [
        Complex64::new(-4.0, 4.0),
        Complex64::new(30.727922061357855, -12.727922061357855),
        Complex64::new(-16.0, 0.0),
        Complex64::new(12.727922061357855, 5.272077938642145),
        Complex64::new(-8.0, -8.0),
        Complex64::new(5.272077938642145, 12.727922061357855),
        Complex64::new(0.0, -16.0),
        Complex64::new(-12.727922061357855, 30.727922061357855),
    ];

    let mut buffer = input;

    // 1. Forward
    fft(&mut buffer).unwrap();
    for (&val, &expected) in buffer.iter().zip(expected_fft.iter()) {
        assert_complex_close(val, expected);
    }

    // 2. Inverse
    ifft(&mut buffer).unwrap();
    for (&val, &expected) in buffer.iter().zip(input.iter()) {
        assert_complex_close(val, expected);
    }
}

#[test]
fn test_box_scenario() {
    let input = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0].map(|re| Complex64::new(re, 0.0));
    let mut buffer = input;

    fft(&mut buffer).unwrap();

    let rounded = buffer.map(|v| {
        Complex64::new((v.re * 1000.0).round() / 1000.0, (v.im * 1000.0).round() / 1000.0)
    });
    assert_eq!(
        rounded,
        [
            Complex64::new(4.0, 0.0),
            Complex64::new(1.0, -2.414),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, -0.414),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.414),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 2.414),
        ]
    );

    ifft(&mut buffer).unwrap();
    for (&val, &expected) in buffer.iter().zip(input.iter()) {
        assert_complex_close(val, expected);
    }
}

#[test]
fn test_single_point_is_fixed() {
    let mut buffer = [Complex64::new(-2.5, 0.75)];
    fft(&mut buffer).unwrap();
    assert_eq!(buffer, [Complex64::new(-2.5, 0.75)]);
    ifft(&mut buffer).unwrap();
    assert_eq!(buffer, [Complex64::new(-2.5, 0.75)]);
}

#[test]
fn test_rejects_invalid_lengths_without_mutating() {
    let original = [Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0), Complex64::new(3.0, 0.0)];
    let mut buffer = original;

    assert_eq!(fft(&mut buffer), Err(FftError::NotPowerOfTwo(3)));
    assert_eq!(ifft(&mut buffer), Err(FftError::NotPowerOfTwo(3)));
    assert_eq!(buffer, original);

    let mut empty: [Complex64; 0] = [];
    assert_eq!(fft(&mut empty), Err(FftError::EmptyInput));
    assert_eq!(ifft(&mut empty), Err(FftError::EmptyInput));
}

#[test]
fn test_engine_matches_free_functions() {
    let engine = CplxFft::new(8).unwrap();
    assert_eq!(engine.size(), 8);

    let mut via_engine = sample_input();
    let mut via_fn = sample_input();
    engine.process(&mut via_engine, false).unwrap();
    fft(&mut via_fn).unwrap();
    assert_eq!(via_engine, via_fn);

    let dyn_engine: &dyn FftProcess<Complex64> = &engine;
    dyn_engine.process(&mut via_engine, true).unwrap();
    for (&val, &expected) in via_engine.iter().zip(sample_input().iter()) {
        assert_complex_close(val, expected);
    }
}

#[test]
fn test_engine_validation() {
    assert_eq!(CplxFft::new(0), Err(FftError::EmptyInput));
    assert_eq!(CplxFft::new(6), Err(FftError::NotPowerOfTwo(6)));

    let engine = CplxFft::new(4).unwrap();
    let mut buffer = [Complex64::new(0.0, 0.0); 8];
    assert_eq!(
        engine.process(&mut buffer, false),
        Err(FftError::SizeMismatch { expected: 4, actual: 8 })
    );
}

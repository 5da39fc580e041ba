use bitvec::prelude::*;
use quickcheck::quickcheck;
use rht_experiment::{Quantizer, SignQuantizer};

#[test]
fn test_sign_quantization() {
    let q = SignQuantizer;
    assert_eq!(
        q.quantize(&[0.3, -2.0, 5.5, -0.001]),
        vec![1.0, -1.0, 1.0, -1.0]
    );
}

#[test]
fn test_zero_quantizes_to_plus_one() {
    let q = SignQuantizer;
    assert_eq!(q.quantize(&[0.0, -0.0]), vec![1.0, 1.0]);
    assert_eq!(SignQuantizer::sign(0.0), 1.0);
    assert_eq!(SignQuantizer::sign(-0.0), 1.0);
}

#[test]
fn test_nan_quantizes_to_plus_one() {
    assert_eq!(SignQuantizer::sign(f64::NAN), 1.0);
    assert_eq!(SignQuantizer::sign(f64::NEG_INFINITY), -1.0);
}

#[test]
fn test_encode_packs_one_bit_per_value() {
    let q = SignQuantizer;
    let bits = q.encode(&[1.0, -1.0, 0.0, -3.0, 2.0]);
    assert_eq!(bits, bitvec![0, 1, 0, 1, 0]);
    assert_eq!(q.decode(&bits), vec![1.0, -1.0, 1.0, -1.0, 1.0]);
}

#[test]
fn test_quantizer_as_trait_object() {
    let q: Box<dyn Quantizer> = Box::new(SignQuantizer);
    assert_eq!(q.quantize(&[-0.5, 0.5]), vec![-1.0, 1.0]);
}

quickcheck! {
    fn prop_decode_encode_matches_quantize(values: Vec<f64>) -> bool {
        let q = SignQuantizer;
        q.decode(&q.encode(&values)) == q.quantize(&values)
    }

    fn prop_quantized_values_are_unit(values: Vec<f64>) -> bool {
        SignQuantizer
            .quantize(&values)
            .iter()
            .all(|&v| v == 1.0 || v == -1.0)
    }
}

use rand::Rng;

use super::*;

#[test]
fn seed_covers_endpoints() {
    assert_eq!(seed_from_unit(0.0), 0);
    assert_eq!(seed_from_unit(1.0), u64::MAX);
}

#[test]
fn seed_clamps_out_of_range_samples() {
    assert_eq!(seed_from_unit(-3.0), 0);
    assert_eq!(seed_from_unit(7.0), u64::MAX);
}

#[test]
fn same_sample_gives_same_stream() {
    let mut a = rng_from_unit(0.25);
    let mut b = rng_from_unit(0.25);
    let xs: Vec<u32> = (0..8).map(|_| a.random()).collect();
    let ys: Vec<u32> = (0..8).map(|_| b.random()).collect();
    assert_eq!(xs, ys);
}

#[test]
fn different_samples_diverge() {
    let mut a = rng_from_unit(0.25);
    let mut b = rng_from_unit(0.75);
    let xs: Vec<u64> = (0..4).map(|_| a.random()).collect();
    let ys: Vec<u64> = (0..4).map(|_| b.random()).collect();
    assert_ne!(xs, ys);
}

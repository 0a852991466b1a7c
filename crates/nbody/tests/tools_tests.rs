//! Integration tests for the hash and mod2pi bindings.
//!
//! String hashing goes through the native library, so string tests only
//! assert the passthrough contract (determinism, 32-bit output), not
//! specific hash values.

use nbody::{hash, mod2pi, Error, HashKey};
use std::f64::consts::TAU;

const EPS: f64 = 1e-12;

// =========================================================
// Integer keys
// =========================================================

#[test]
fn test_hash_small_id_is_identity() {
    assert_eq!(hash(HashKey::Id(0)).unwrap(), 0);
    assert_eq!(hash(HashKey::Id(5)).unwrap(), 5);
    assert_eq!(hash(HashKey::Id(u64::from(u32::MAX))).unwrap(), u32::MAX);
}

#[test]
fn test_hash_large_id_truncates_to_32_bits() {
    assert_eq!(hash(HashKey::Id((1u64 << 32) + 7)).unwrap(), 7);
    assert_eq!(hash(HashKey::Id(u64::MAX)).unwrap(), u32::MAX);
}

#[test]
fn test_hash_accepts_plain_integers_via_from() {
    // A u32 key is already its own hash.
    assert_eq!(hash(42u32).unwrap(), 42);
    assert_eq!(hash(1u64 << 33).unwrap(), 0);
}

// =========================================================
// String keys
// =========================================================

#[test]
fn test_hash_string_is_deterministic() {
    let a = hash(HashKey::Name("mercury")).unwrap();
    let b = hash(HashKey::Name("mercury")).unwrap();
    assert_eq!(a, b);

    // Owned and borrowed spellings of the same name agree.
    let owned = String::from("mercury");
    assert_eq!(hash(HashKey::Name(&owned)).unwrap(), a);
}

#[test]
fn test_hash_distinct_strings_differ() {
    let a = hash(HashKey::Name("mercury")).unwrap();
    let b = hash(HashKey::Name("venus")).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_hash_rejects_non_ascii_name() {
    let err = hash(HashKey::Name("π")).unwrap_err();
    assert!(matches!(err, Error::InvalidKey(_)));
    assert!(err.to_string().contains("ASCII"));
}

#[test]
fn test_hash_rejects_interior_nul() {
    let err = hash(HashKey::Name("a\0b")).unwrap_err();
    assert!(matches!(err, Error::InvalidKey(_)));
}

// =========================================================
// Angle reduction
// =========================================================

#[test]
fn test_mod2pi_multiples_of_tau_reduce_to_zero() {
    assert!(mod2pi(0.0).abs() < EPS);
    assert!(mod2pi(TAU).abs() < EPS);
    assert!(mod2pi(2.0 * TAU).abs() < EPS);
    assert!(mod2pi(-TAU).abs() < EPS);
}

#[test]
fn test_mod2pi_small_angle_unchanged() {
    assert!((mod2pi(0.5) - 0.5).abs() < EPS);
    assert!((mod2pi(TAU - 0.5) - (TAU - 0.5)).abs() < EPS);
}

#[test]
fn test_mod2pi_wraps_negative_angles() {
    assert!((mod2pi(-0.25) - (TAU - 0.25)).abs() < EPS);
}

#[test]
fn test_mod2pi_result_is_in_range() {
    for i in -100..=100 {
        let x = f64::from(i) * 0.731;
        let r = mod2pi(x);
        assert!(
            (0.0..TAU).contains(&r),
            "mod2pi({x}) = {r} out of [0, 2pi)"
        );
    }
}

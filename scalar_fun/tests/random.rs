use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use scalar_fun::{Curve, CurveScalar};

#[test]
fn random_scalars_are_in_range() {
    let mut rng = rand::thread_rng();
    for curve in Curve::ALL {
        for _ in 0..50 {
            let x = CurveScalar::random(curve, &mut rng);
            assert!(x.to_int() < curve.order());
            assert_eq!(x.curve(), Some(curve));
            assert_eq!(x.to_bytes().len(), curve.scalar_size());
        }
    }
}

#[test]
fn seeded_rng_is_reproducible() {
    let a = CurveScalar::random(Curve::Secp256r1, &mut ChaCha20Rng::seed_from_u64(42));
    let b = CurveScalar::random(Curve::Secp256r1, &mut ChaCha20Rng::seed_from_u64(42));
    let c = CurveScalar::random(Curve::Secp256r1, &mut ChaCha20Rng::seed_from_u64(43));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn zero_modulus() {
    assert_eq!(
        CurveScalar::random_with_modulus(&0u32.into(), &mut rand::thread_rng()),
        Err(scalar_fun::Error::ZeroModulus)
    );
}

/// Pearson's chi-squared test over the residues mod 7. With 6 degrees of freedom the statistic
/// exceeds 22.46 with probability 0.001.
#[test]
fn uniform_over_small_modulus() {
    const MODULUS: u32 = 7;
    const SAMPLES: u32 = 7_000;
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut counts = [0u32; MODULUS as usize];

    for _ in 0..SAMPLES {
        let x = CurveScalar::random_with_modulus(&MODULUS.into(), &mut rng).unwrap();
        let bytes = x.to_bytes();
        assert_eq!(bytes.len(), 1);
        counts[bytes[0] as usize] += 1;
    }

    let expected = f64::from(SAMPLES) / f64::from(MODULUS);
    let chi_squared: f64 = counts
        .iter()
        .map(|&count| (f64::from(count) - expected).powi(2) / expected)
        .sum();
    assert!(chi_squared < 22.46, "{:?} chi^2 = {}", counts, chi_squared);
}

/// The secp256k1 order is within 2^129 of 2^256 so the top three bits of a uniform scalar are
/// uniform over 8 buckets for all practical purposes. With 7 degrees of freedom the statistic
/// exceeds 24.32 with probability 0.001.
#[test]
fn uniform_top_bits_on_curve() {
    const SAMPLES: u32 = 8_000;
    let mut rng = ChaCha20Rng::seed_from_u64(256);
    let mut counts = [0u32; 8];

    for _ in 0..SAMPLES {
        let x = CurveScalar::random(Curve::Secp256k1, &mut rng);
        counts[(x.to_bytes()[0] >> 5) as usize] += 1;
    }

    let expected = f64::from(SAMPLES) / 8.0;
    let chi_squared: f64 = counts
        .iter()
        .map(|&count| (f64::from(count) - expected).powi(2) / expected)
        .sum();
    assert!(chi_squared < 24.32, "{:?} chi^2 = {}", counts, chi_squared);
}

use anyhow::Result;
use zkpair_base::rand::ZkpairRng;
use zkpair_curves::curves::bls12_381::curves::g2::G2Affine;
use zkpair_curves::curves::bls12_381::hashing::{hash_to_point, DST_G1};
use zkpair_curves::curves::bls12_381::pairing::BLS12_381Pairing;
use zkpair_curves::curves::bls12_381::signature::{raw_verify_g1, verify, SecretKey};
use zkpair_curves::curves::bls12_381::witness::{compute_witness, verify_equivalent_pairings};

#[test]
fn test_signature_flow_with_serialization() -> Result<()> {
    let mut rng = ZkpairRng::from_seed(77);
    let secret_key = SecretKey::random(&mut rng);

    let message = b"attestation payload 9162609";
    let signature = secret_key.sign(message)?;

    // Ship both halves as compressed bytes and verify on the other side.
    let public_key = G2Affine::from_compressed(&secret_key.public_key().to_compressed())?;
    assert!(verify(&public_key, &signature, message)?);
    assert!(!verify(&public_key, &signature, b"attestation payload 9162610")?);

    Ok(())
}

#[test]
fn test_verification_product_admits_residue_witness() -> Result<()> {
    // A passing BLS verification is a pairing product equal to one; its
    // Miller accumulator therefore admits a residue witness, and the
    // witness re-verifies against the same point sequences without a
    // final exponentiation.
    let mut rng = ZkpairRng::from_seed(78);
    let secret_key = SecretKey::random(&mut rng);

    let message = b"witnessed message";
    let hashed_message = hash_to_point(DST_G1, message)?;
    let signature = secret_key.sign_hashed(&hashed_message);

    let g1_points = vec![hashed_message, signature];
    let g2_points = vec![secret_key.public_key().neg(), G2Affine::generator()];

    assert!(raw_verify_g1(
        &g2_points[0].neg(),
        &g1_points[1],
        &g1_points[0]
    )?);

    let f = BLS12_381Pairing::multi_miller_loop(&[
        (&g1_points[0], &g2_points[0]),
        (&g1_points[1], &g2_points[1]),
    ])?;

    let witness = compute_witness(&f)?;
    assert!(verify_equivalent_pairings(&g1_points, &g2_points, &witness)?);

    // A product that does not equal one admits no witness.
    let other_message = hash_to_point(DST_G1, b"a different message")?;
    let tampered = BLS12_381Pairing::multi_miller_loop(&[
        (&other_message, &g2_points[0]),
        (&g1_points[1], &g2_points[1]),
    ])?;
    assert!(compute_witness(&tampered).is_err());

    // And the honest witness does not transfer to the tampered product.
    let tampered_g1 = vec![other_message, g1_points[1].clone()];
    assert!(!verify_equivalent_pairings(&tampered_g1, &g2_points, &witness)?);

    Ok(())
}

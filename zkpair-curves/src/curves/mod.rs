pub mod bls12_381;

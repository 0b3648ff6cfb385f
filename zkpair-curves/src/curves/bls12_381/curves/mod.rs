use core::fmt;
use rand::RngCore;
use rug::Integer;

use crate::curves::bls12_381::fields::fp2::Fp2;
use crate::curves::bls12_381::{Bls12_381BaseField, BLS12_381_BASE};
use crate::errors::Bls12381Error;

pub mod g1;
pub mod g2;

/// Big-endian 48-byte encoding of a reduced base field element.
pub(crate) fn to_bytes_be_48(value: &Integer) -> [u8; 48] {
    let digits = value.to_digits::<u8>(rug::integer::Order::Msf);
    let mut out = [0u8; 48];
    out[48 - digits.len()..].copy_from_slice(&digits);
    out
}

pub(crate) fn parse_hex(s: &str) -> Integer {
    let trimmed = s.trim_start_matches("0x");
    Integer::from_str_radix(trimmed, 16).expect("hex literal")
}

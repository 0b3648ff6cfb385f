use crate::errors::Bls12381Error;
use crate::traits::field::FieldElement;
use rand_core::RngCore;
use rug::Integer;
use std::fmt::Display;

pub mod base;
pub mod fp12;
pub mod fp2;
pub mod fp6;
pub mod scalar;
pub mod target;

use rug::ops::RemRounding;
use rug::Integer;
use thiserror::Error;

/// Error occured during modular arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModularError {
    /// Inverse of zero requested.
    #[error("inversion of zero")]
    InversionOfZero,
    /// The value shares a factor with the modulus.
    #[error("value is not coprime with the modulus")]
    NotCoprime,
}

/// Non-negative representative of `n` in `[0, m)`.
pub fn mod_reduce(n: &Integer, m: &Integer) -> Integer {
    n.clone().rem_euc(m)
}

/// Modular exponentiation by right-to-left binary scan.
///
/// The exponent must be non-negative; negative powers go through
/// [`mod_inverse`] first.
pub fn mod_exp(base: &Integer, exponent: &Integer, modulus: &Integer) -> Integer {
    debug_assert!(*exponent >= 0);

    let mut result = Integer::from(1);
    let mut base = mod_reduce(base, modulus);
    let mut exponent = exponent.clone();

    while exponent != 0 {
        if exponent.is_odd() {
            result = (result * &base).rem_euc(modulus);
        }
        base = base.square().rem_euc(modulus);
        exponent >>= 1;
    }

    result
}

/// Modular inverse by the iterative extended Euclidean algorithm.
pub fn mod_inverse(value: &Integer, modulus: &Integer) -> Result<Integer, ModularError> {
    let value = mod_reduce(value, modulus);
    if value.is_zero() {
        return Err(ModularError::InversionOfZero);
    }

    let (mut old_r, mut r) = (value, modulus.clone());
    let (mut old_s, mut s) = (Integer::from(1), Integer::from(0));

    while !r.is_zero() {
        let quotient = Integer::from(&old_r / &r);

        let next_r = old_r - Integer::from(&quotient * &r);
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = old_s - quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if old_r != 1 {
        return Err(ModularError::NotCoprime);
    }

    Ok(mod_reduce(&old_s, modulus))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_reduce_is_non_negative() {
        let m = Integer::from(97);
        assert_eq!(mod_reduce(&Integer::from(-1), &m), Integer::from(96));
        assert_eq!(mod_reduce(&Integer::from(97), &m), Integer::from(0));
        assert_eq!(mod_reduce(&Integer::from(-290), &m), Integer::from(1));
    }

    #[test]
    fn test_mod_exp_matches_rug() {
        let m = Integer::from_str_radix("1000000007", 10).unwrap();
        let base = Integer::from(123456789);
        let exponent = Integer::from(987654321);

        let expected = base
            .clone()
            .pow_mod(&exponent, &m)
            .expect("non-negative exponent");
        assert_eq!(mod_exp(&base, &exponent, &m), expected);
        assert_eq!(mod_exp(&base, &Integer::from(0), &m), Integer::from(1));
    }

    #[test]
    fn test_mod_inverse() {
        let m = Integer::from(97);
        for v in 1..97 {
            let v = Integer::from(v);
            let inv = mod_inverse(&v, &m).unwrap();
            assert_eq!((v * inv).rem_euc(&m), Integer::from(1));
        }
    }

    #[test]
    fn test_mod_inverse_of_zero() {
        let m = Integer::from(97);
        assert_eq!(
            mod_inverse(&Integer::from(0), &m),
            Err(ModularError::InversionOfZero)
        );
        assert_eq!(
            mod_inverse(&Integer::from(97 * 5), &m),
            Err(ModularError::InversionOfZero)
        );
    }

    #[test]
    fn test_mod_inverse_not_coprime() {
        let m = Integer::from(96);
        assert_eq!(
            mod_inverse(&Integer::from(8), &m),
            Err(ModularError::NotCoprime)
        );
    }
}

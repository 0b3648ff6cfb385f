use crate::curves::bls12_381::fields::fp12::Fp12;
use crate::curves::bls12_381::fields::fp6::Fp6;
use crate::curves::bls12_381::BLS12_381_SCALAR;

use super::*;

lazy_static::lazy_static! {
    /// b' = 4 + 4u in y^2 = x^3 + b' on the twist.
    pub static ref G2_B: Fp2 = Fp2::new(Integer::from(4), Integer::from(4));

    /// The twist cofactor h2, a 507-bit constant; multiplication by it
    /// lands any twist point in the prime-order subgroup.
    pub static ref G2_COFACTOR: Integer = parse_hex(
        "0x5d543a95414e7f1091d50792876a202cd91de4547085abaa68a205b2e5a7ddfa628f1cb4d9e82ef21537e293a6691ae1616ec6e786f0c70cf1c38e31c7238e5",
    );

    pub static ref G2_GENERATOR: G2Affine = G2Affine::from_str_hex(
        "0x024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8",
        "0x13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e",
        "0x0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801",
        "0x0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be",
    );
}

/// Affine point on the twist E'/Fq2: y^2 = x^3 + 4 + 4u. The identity is
/// the distinguished (0, 0) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct G2Affine {
    pub x: Fp2,
    pub y: Fp2,
}

impl fmt::Display for G2Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "G2Affine {{\n    x: {},\n    y: {}\n}}", self.x, self.y)
        } else {
            write!(f, "G2Affine({}, {})", self.x, self.y)
        }
    }
}

impl G2Affine {
    pub fn new(x: Fp2, y: Fp2) -> Self {
        Self { x, y }
    }

    /// Coordinates as (x.c0, x.c1, y.c0, y.c1) hex strings.
    pub fn from_str_hex(x_c0: &str, x_c1: &str, y_c0: &str, y_c1: &str) -> Self {
        Self {
            x: Fp2::new(parse_hex(x_c0), parse_hex(x_c1)),
            y: Fp2::new(parse_hex(y_c0), parse_hex(y_c1)),
        }
    }

    /// Returns the identity element (the point at infinity).
    #[inline]
    pub fn identity() -> Self {
        G2Affine {
            x: Fp2::zero(),
            y: Fp2::zero(),
        }
    }

    /// Returns true if this point is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn generator() -> Self {
        G2_GENERATOR.clone()
    }

    pub fn neg(&self) -> Self {
        if self.is_identity() {
            return self.clone();
        }
        G2Affine {
            x: self.x.clone(),
            y: self.y.neg(),
        }
    }

    pub fn double(&self) -> Self {
        if self.is_identity() {
            return self.clone();
        }

        let numerator = self.x.square().mul_base(&Integer::from(3));
        let slope = match self.y.double().invert() {
            Ok(inverted) => numerator.mul(&inverted),
            Err(_) => return Self::identity(),
        };

        let x3 = slope.square().sub(&self.x.double());
        let y3 = slope.mul(&self.x.sub(&x3)).sub(&self.y);

        G2Affine { x: x3, y: y3 }
    }

    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            }
            return Self::identity();
        }

        let dx = other.x.sub(&self.x);
        let dy = other.y.sub(&self.y);
        let slope = match dx.invert() {
            Ok(inverted) => dy.mul(&inverted),
            Err(_) => return Self::identity(),
        };

        let x3 = slope.square().sub(&self.x).sub(&other.x);
        let y3 = slope.mul(&self.x.sub(&x3)).sub(&self.y);

        G2Affine { x: x3, y: y3 }
    }

    /// Double-and-add over the unsigned binary expansion of |c|; a
    /// negative scalar negates the result.
    pub fn mul(&self, scalar: &Integer) -> Self {
        let magnitude = Integer::from(scalar.abs_ref());
        if magnitude.is_zero() {
            return Self::identity();
        }

        let mut result = if magnitude == 1 {
            self.clone()
        } else {
            let mut acc = Self::identity();
            for i in (0..magnitude.significant_bits()).rev() {
                acc = acc.double();
                if magnitude.get_bit(i) {
                    acc = acc.add(self);
                }
            }
            acc
        };

        if *scalar < 0 {
            result = result.neg();
        }
        result
    }

    /// The identity is not considered on-curve.
    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return false;
        }
        let lhs = self.y.square();
        let rhs = self.x.square().mul(&self.x).add(&G2_B);
        lhs == rhs
    }

    pub fn is_in_subgroup(&self) -> bool {
        self.mul(&BLS12_381_SCALAR.modulus()).is_identity()
    }

    pub fn is_valid(&self) -> bool {
        self.is_identity() || (self.is_on_curve() && self.is_in_subgroup())
    }

    /// Multiplication by the twist cofactor h2.
    pub fn clear_cofactor(&self) -> Self {
        self.mul(&G2_COFACTOR)
    }

    /// Uniform subgroup point: sample x until x^3 + b' is a square, pick a
    /// root sign at random, then clear the cofactor.
    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        loop {
            let x = Fp2::random(rng);
            let flip_sign = rng.next_u32() % 2 != 0;

            let y_squared = x.square().mul(&x).add(&G2_B);
            if let Ok(y) = y_squared.sqrt() {
                let y = if flip_sign { y.neg() } else { y };

                let point = G2Affine { x, y }.clear_cofactor();
                if !point.is_identity() {
                    return point;
                }
            }
        }
    }

    /// Embeds this twist point into Fq12 for line evaluation: with
    /// root = v, the wide coordinates are x / w^2 and y / w^3. The result
    /// is only an intermediate; no Fq12 group law is attached to it.
    pub fn untwist(&self) -> Result<(Fp12, Fp12), Bls12381Error> {
        let root = Fp6::new(Fp2::zero(), Fp2::one(), Fp2::zero());

        let wide_x = Fp12::from(Fp6::from(self.x.clone()))
            .mul(&Fp12::new(root.clone(), Fp6::zero()).invert()?);
        let wide_y = Fp12::from(Fp6::from(self.y.clone()))
            .mul(&Fp12::new(Fp6::zero(), root).invert()?);

        Ok((wide_x, wide_y))
    }

    /// The y lex-largest flag compares the c1 coordinate first.
    fn is_lexicographically_largest(value: &Fp2) -> bool {
        if !value.c1.is_zero() {
            BLS12_381_BASE.is_lexicographically_largest(&value.c1)
        } else {
            BLS12_381_BASE.is_lexicographically_largest(&value.c0)
        }
    }

    /// 96-byte compressed encoding: x as (c1, c0) big-endian halves, flag
    /// bits as in G1.
    pub fn to_compressed(&self) -> [u8; 96] {
        let mut bytes = [0u8; 96];
        if self.is_identity() {
            bytes[0] = 0x80 | 0x40;
            return bytes;
        }

        bytes[..48].copy_from_slice(&to_bytes_be_48(&self.x.c1));
        bytes[48..].copy_from_slice(&to_bytes_be_48(&self.x.c0));
        bytes[0] |= 0x80;
        if Self::is_lexicographically_largest(&self.y) {
            bytes[0] |= 0x20;
        }
        bytes
    }

    /// 192-byte uncompressed encoding: x then y, each as (c1, c0).
    pub fn to_uncompressed(&self) -> [u8; 192] {
        let mut bytes = [0u8; 192];
        if self.is_identity() {
            bytes[0] = 0x40;
            return bytes;
        }

        bytes[..48].copy_from_slice(&to_bytes_be_48(&self.x.c1));
        bytes[48..96].copy_from_slice(&to_bytes_be_48(&self.x.c0));
        bytes[96..144].copy_from_slice(&to_bytes_be_48(&self.y.c1));
        bytes[144..].copy_from_slice(&to_bytes_be_48(&self.y.c0));
        bytes
    }

    pub fn from_compressed(bytes: &[u8]) -> Result<Self, Bls12381Error> {
        if bytes.len() != 96 {
            return Err(Bls12381Error::InvalidLength {
                expected: 96,
                actual: bytes.len(),
            });
        }

        let compressed = bytes[0] & 0x80 != 0;
        let infinity = bytes[0] & 0x40 != 0;
        let sort = bytes[0] & 0x20 != 0;
        if !compressed {
            return Err(Bls12381Error::InvalidPoint);
        }

        let mut payload = [0u8; 96];
        payload.copy_from_slice(bytes);
        payload[0] &= 0x1f;

        let x_c1 = Integer::from_digits(&payload[..48], rug::integer::Order::Msf);
        let x_c0 = Integer::from_digits(&payload[48..], rug::integer::Order::Msf);

        if infinity {
            if sort || !x_c0.is_zero() || !x_c1.is_zero() {
                return Err(Bls12381Error::InvalidPoint);
            }
            return Ok(Self::identity());
        }

        let modulus = BLS12_381_BASE.modulus_ref();
        if x_c0 >= *modulus || x_c1 >= *modulus {
            return Err(Bls12381Error::InvalidPoint);
        }

        let x = Fp2 { c0: x_c0, c1: x_c1 };
        let y_squared = x.square().mul(&x).add(&G2_B);
        let y = y_squared
            .sqrt()
            .map_err(|_| Bls12381Error::InvalidPoint)?;

        let y = if sort != Self::is_lexicographically_largest(&y) {
            y.neg()
        } else {
            y
        };

        Ok(G2Affine { x, y })
    }

    pub fn from_uncompressed(bytes: &[u8]) -> Result<Self, Bls12381Error> {
        if bytes.len() != 192 {
            return Err(Bls12381Error::InvalidLength {
                expected: 192,
                actual: bytes.len(),
            });
        }

        let compressed = bytes[0] & 0x80 != 0;
        let infinity = bytes[0] & 0x40 != 0;
        let sort = bytes[0] & 0x20 != 0;
        if compressed || sort {
            return Err(Bls12381Error::InvalidPoint);
        }

        let mut payload = [0u8; 192];
        payload.copy_from_slice(bytes);
        payload[0] &= 0x1f;

        let x_c1 = Integer::from_digits(&payload[..48], rug::integer::Order::Msf);
        let x_c0 = Integer::from_digits(&payload[48..96], rug::integer::Order::Msf);
        let y_c1 = Integer::from_digits(&payload[96..144], rug::integer::Order::Msf);
        let y_c0 = Integer::from_digits(&payload[144..], rug::integer::Order::Msf);

        if infinity {
            if !x_c0.is_zero() || !x_c1.is_zero() || !y_c0.is_zero() || !y_c1.is_zero() {
                return Err(Bls12381Error::InvalidPoint);
            }
            return Ok(Self::identity());
        }

        let modulus = BLS12_381_BASE.modulus_ref();
        if x_c0 >= *modulus || x_c1 >= *modulus || y_c0 >= *modulus || y_c1 >= *modulus {
            return Err(Bls12381Error::InvalidPoint);
        }

        let point = G2Affine {
            x: Fp2 { c0: x_c0, c1: x_c1 },
            y: Fp2 { c0: y_c0, c1: y_c1 },
        };
        if !point.is_on_curve() {
            return Err(Bls12381Error::InvalidPoint);
        }
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkpair_base::rand::ZkpairRng;

    #[test]
    fn test_generator_is_valid() {
        let g = G2Affine::generator();
        assert!(g.is_on_curve());
        assert!(g.is_in_subgroup());
        assert!(g.mul(&BLS12_381_SCALAR.modulus()).is_identity());
    }

    #[test]
    fn test_group_laws() {
        let g = G2Affine::generator();
        let id = G2Affine::identity();

        assert_eq!(g.add(&id), g);
        assert_eq!(id.add(&g), g);
        assert!(g.add(&g.neg()).is_identity());

        let h = g.double();
        assert_eq!(g.add(&h), h.add(&g));
        assert_eq!(g.mul(&Integer::from(2)), h);

        let n = Integer::from(98765);
        let m = Integer::from(43210);
        let sum = Integer::from(&n + &m);
        assert_eq!(g.mul(&n).add(&g.mul(&m)), g.mul(&sum));
    }

    #[test]
    fn test_random_points_land_in_subgroup() {
        let mut rng = ZkpairRng::new_test();
        let p = G2Affine::random(&mut rng);
        assert!(p.is_on_curve());
        assert!(p.is_in_subgroup());
    }

    #[test]
    fn test_cofactor_clearing_of_twist_point() {
        let mut rng = ZkpairRng::new_test();
        loop {
            let x = Fp2::random(&mut rng);
            let y_squared = x.square().mul(&x).add(&G2_B);
            if let Ok(y) = y_squared.sqrt() {
                let p = G2Affine { x, y };
                assert!(p.is_on_curve());
                assert!(p.clear_cofactor().is_in_subgroup());
                break;
            }
        }
    }

    #[test]
    fn test_untwist_satisfies_wide_curve_equation() {
        // The untwisted coordinates satisfy y^2 = x^3 + 4 over Fq12.
        let g = G2Affine::generator();
        let (wide_x, wide_y) = g.untwist().unwrap();

        let lhs = wide_y.square();
        let rhs = wide_x
            .square()
            .mul(&wide_x)
            .add(&Fp12::from_base(Integer::from(4)));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut rng = ZkpairRng::new_test();
        let g = G2Affine::generator();

        for point in [
            g.clone(),
            g.neg(),
            g.double(),
            G2Affine::random(&mut rng),
            G2Affine::identity(),
        ] {
            assert_eq!(
                G2Affine::from_compressed(&point.to_compressed()).unwrap(),
                point
            );
            assert_eq!(
                G2Affine::from_uncompressed(&point.to_uncompressed()).unwrap(),
                point
            );
        }
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        let g = G2Affine::generator();

        assert_eq!(
            G2Affine::from_compressed(&[0u8; 95]),
            Err(Bls12381Error::InvalidLength {
                expected: 96,
                actual: 95
            })
        );

        let mut bytes = g.to_compressed();
        bytes[0] &= 0x7f;
        assert_eq!(
            G2Affine::from_compressed(&bytes),
            Err(Bls12381Error::InvalidPoint)
        );

        let mut bytes = g.to_compressed();
        bytes[0] |= 0x40;
        assert_eq!(
            G2Affine::from_compressed(&bytes),
            Err(Bls12381Error::InvalidPoint)
        );
    }
}

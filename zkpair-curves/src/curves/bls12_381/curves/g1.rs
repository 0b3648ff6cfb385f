use crate::curves::bls12_381::{BLS12_381_SCALAR, BLS_X};

use super::*;

lazy_static::lazy_static! {
    /// b = 4 in y^2 = x^3 + 4.
    pub static ref G1_B: Integer = Integer::from(4);

    pub static ref G1_GENERATOR: G1Affine = G1Affine::from_str_hex(
        "0x17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb",
        "0x08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1",
    );
}

/// Affine point on E/Fq: y^2 = x^3 + 4. The identity is the distinguished
/// (0, 0) pair, which is not a curve point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct G1Affine {
    pub x: Integer,
    pub y: Integer,
}

impl fmt::Display for G1Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "G1Affine {{\n    x: {},\n    y: {}\n}}",
                self.x.to_string_radix(16),
                self.y.to_string_radix(16),
            )
        } else {
            write!(
                f,
                "G1Affine({}, {})",
                self.x.to_string_radix(16),
                self.y.to_string_radix(16),
            )
        }
    }
}

impl G1Affine {
    pub fn new(x: Integer, y: Integer) -> Self {
        Self {
            x: BLS12_381_BASE.reduce(x),
            y: BLS12_381_BASE.reduce(y),
        }
    }

    pub fn from_str_hex(x: &str, y: &str) -> Self {
        Self::new(parse_hex(x), parse_hex(y))
    }

    /// Returns the identity element (the point at infinity).
    #[inline]
    pub fn identity() -> Self {
        G1Affine {
            x: Integer::from(0),
            y: Integer::from(0),
        }
    }

    /// Returns true if this point is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn generator() -> Self {
        G1_GENERATOR.clone()
    }

    pub fn neg(&self) -> Self {
        if self.is_identity() {
            return self.clone();
        }
        G1Affine {
            x: self.x.clone(),
            y: Bls12_381BaseField::neg(self.y.clone()),
        }
    }

    pub fn double(&self) -> Self {
        if self.is_identity() {
            return self.clone();
        }

        // k = 3 x^2 / (2 y); a vertical tangent (y = 0) closes to the
        // identity.
        let numerator = Bls12_381BaseField::mul(
            Bls12_381BaseField::square(self.x.clone()),
            &Integer::from(3),
        );
        let denominator = match Bls12_381BaseField::invert(Bls12_381BaseField::double(
            self.y.clone(),
        )) {
            Ok(inverted) => inverted,
            Err(_) => return Self::identity(),
        };
        let slope = Bls12_381BaseField::mul(numerator, &denominator);

        let x3 = Bls12_381BaseField::sub(
            Bls12_381BaseField::square(slope.clone()),
            &Bls12_381BaseField::double(self.x.clone()),
        );
        let y3 = Bls12_381BaseField::sub(
            Bls12_381BaseField::mul(slope, &Bls12_381BaseField::sub(self.x.clone(), &x3)),
            &self.y,
        );

        G1Affine { x: x3, y: y3 }
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
            // x = x', y = -y': the chord is vertical.
            return Self::identity();
        }

        // k = (y' - y) / (x' - x)
        let dx = Bls12_381BaseField::sub(other.x.clone(), &self.x);
        let dy = Bls12_381BaseField::sub(other.y.clone(), &self.y);
        let slope = match Bls12_381BaseField::invert(dx) {
            Ok(inverted) => Bls12_381BaseField::mul(dy, &inverted),
            Err(_) => return Self::identity(),
        };

        let x3 = Bls12_381BaseField::sub(
            Bls12_381BaseField::sub(Bls12_381BaseField::square(slope.clone()), &self.x),
            &other.x,
        );
        let y3 = Bls12_381BaseField::sub(
            Bls12_381BaseField::mul(slope, &Bls12_381BaseField::sub(self.x.clone(), &x3)),
            &self.y,
        );

        G1Affine { x: x3, y: y3 }
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
        let lhs = Bls12_381BaseField::square(self.y.clone());
        let rhs = Bls12_381BaseField::add(Bls12_381BaseField::cubic(self.x.clone()), &G1_B);
        lhs == rhs
    }

    pub fn is_in_subgroup(&self) -> bool {
        self.mul(&BLS12_381_SCALAR.modulus()).is_identity()
    }

    /// A pairing input is valid when it is the identity or a subgroup
    /// point on the curve.
    pub fn is_valid(&self) -> bool {
        self.is_identity() || (self.is_on_curve() && self.is_in_subgroup())
    }

    /// Multiplication by 1 - X maps any curve point into the prime-order
    /// subgroup.
    pub fn clear_cofactor(&self) -> Self {
        let multiplier = Integer::from(1) - &*BLS_X;
        self.mul(&multiplier)
    }

    /// Uniform subgroup point: sample x until x^3 + 4 is a square, pick a
    /// root sign at random, then clear the cofactor.
    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        loop {
            let x = Bls12_381BaseField::random(rng);
            let flip_sign = rng.next_u32() % 2 != 0;

            let y_squared =
                Bls12_381BaseField::add(Bls12_381BaseField::cubic(x.clone()), &G1_B);
            if let Ok(y) = Bls12_381BaseField::sqrt(y_squared) {
                let y = if flip_sign {
                    Bls12_381BaseField::neg(y)
                } else {
                    y
                };

                let point = G1Affine { x, y }.clear_cofactor();
                if !point.is_identity() {
                    return point;
                }
            }
        }
    }

    /// 48-byte compressed encoding: bit 7 of byte 0 set, bit 6 flags the
    /// identity, bit 5 flags the lexicographically larger root.
    pub fn to_compressed(&self) -> [u8; 48] {
        if self.is_identity() {
            let mut bytes = [0u8; 48];
            bytes[0] = 0x80 | 0x40;
            return bytes;
        }

        let mut bytes = to_bytes_be_48(&self.x);
        bytes[0] |= 0x80;
        if BLS12_381_BASE.is_lexicographically_largest(&self.y) {
            bytes[0] |= 0x20;
        }
        bytes
    }

    /// 96-byte uncompressed encoding: x then y, bit 6 of byte 0 flags the
    /// identity.
    pub fn to_uncompressed(&self) -> [u8; 96] {
        let mut bytes = [0u8; 96];
        if self.is_identity() {
            bytes[0] = 0x40;
            return bytes;
        }

        bytes[..48].copy_from_slice(&to_bytes_be_48(&self.x));
        bytes[48..].copy_from_slice(&to_bytes_be_48(&self.y));
        bytes
    }

    pub fn from_compressed(bytes: &[u8]) -> Result<Self, Bls12381Error> {
        if bytes.len() != 48 {
            return Err(Bls12381Error::InvalidLength {
                expected: 48,
                actual: bytes.len(),
            });
        }

        let compressed = bytes[0] & 0x80 != 0;
        let infinity = bytes[0] & 0x40 != 0;
        let sort = bytes[0] & 0x20 != 0;
        if !compressed {
            return Err(Bls12381Error::InvalidPoint);
        }

        let mut payload = [0u8; 48];
        payload.copy_from_slice(bytes);
        payload[0] &= 0x1f;
        let x = Integer::from_digits(&payload, rug::integer::Order::Msf);

        if infinity {
            if sort || !x.is_zero() {
                return Err(Bls12381Error::InvalidPoint);
            }
            return Ok(Self::identity());
        }

        if x >= *BLS12_381_BASE.modulus_ref() {
            return Err(Bls12381Error::InvalidPoint);
        }

        let y_squared = Bls12_381BaseField::add(Bls12_381BaseField::cubic(x.clone()), &G1_B);
        let y = Bls12_381BaseField::sqrt(y_squared).map_err(|_| Bls12381Error::InvalidPoint)?;

        let y = if sort != BLS12_381_BASE.is_lexicographically_largest(&y) {
            Bls12_381BaseField::neg(y)
        } else {
            y
        };

        Ok(G1Affine { x, y })
    }

    pub fn from_uncompressed(bytes: &[u8]) -> Result<Self, Bls12381Error> {
        if bytes.len() != 96 {
            return Err(Bls12381Error::InvalidLength {
                expected: 96,
                actual: bytes.len(),
            });
        }

        let compressed = bytes[0] & 0x80 != 0;
        let infinity = bytes[0] & 0x40 != 0;
        let sort = bytes[0] & 0x20 != 0;
        if compressed || sort {
            return Err(Bls12381Error::InvalidPoint);
        }

        let mut payload = [0u8; 96];
        payload.copy_from_slice(bytes);
        payload[0] &= 0x1f;

        let x = Integer::from_digits(&payload[..48], rug::integer::Order::Msf);
        let y = Integer::from_digits(&payload[48..], rug::integer::Order::Msf);

        if infinity {
            if !x.is_zero() || !y.is_zero() {
                return Err(Bls12381Error::InvalidPoint);
            }
            return Ok(Self::identity());
        }

        let modulus = BLS12_381_BASE.modulus_ref();
        if x >= *modulus || y >= *modulus {
            return Err(Bls12381Error::InvalidPoint);
        }

        let point = G1Affine { x, y };
        if !point.is_on_curve() {
            return Err(Bls12381Error::InvalidPoint);
        }
        Ok(point)
    }
}

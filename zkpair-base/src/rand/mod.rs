use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rug::Integer;

/// Seed of the deterministic stream shared by the test suites.
const TEST_SEED: u64 = 1234567890;

/// ChaCha20-backed randomness source for sampling field elements, scalars
/// and curve points.
///
/// The stream is fully determined by its key: [`ZkpairRng::new`] keys it
/// from the operating system entropy pool, the other constructors produce
/// reproducible streams.
pub struct ZkpairRng {
    stream: ChaCha20Rng,
}

impl ZkpairRng {
    /// Keys the stream from the operating system CSPRNG.
    pub fn new() -> Self {
        Self {
            stream: ChaCha20Rng::from_entropy(),
        }
    }

    /// The fixed stream used across the test suites.
    pub fn new_test() -> Self {
        Self::from_seed(TEST_SEED)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            stream: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Keys the stream from an arbitrary-precision value, such as a
    /// transcript element; the low 256 bits of its magnitude become the
    /// ChaCha key.
    pub fn from_integer(seed: &Integer) -> Self {
        let mut key = [0u8; 32];
        let digits = seed.to_digits::<u8>(rug::integer::Order::Lsf);
        let taken = digits.len().min(key.len());
        key[..taken].copy_from_slice(&digits[..taken]);

        Self {
            stream: ChaCha20Rng::from_seed(key),
        }
    }
}

impl Default for ZkpairRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for ZkpairRng {
    fn next_u32(&mut self) -> u32 {
        self.stream.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.stream.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.stream.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.stream.try_fill_bytes(dest)
    }
}

impl CryptoRng for ZkpairRng {}

/// Uniform integer in `[0, bound)` by rejection sampling over the bit
/// length of the bound.
pub fn random_below<R: RngCore>(rng: &mut R, bound: &Integer) -> Integer {
    debug_assert!(*bound > 0);

    let bits = bound.significant_bits() as usize;
    let bytes = (bits + 7) / 8;
    let excess = bytes * 8 - bits;
    let mut buf = vec![0u8; bytes];

    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xff >> excess;

        let candidate = Integer::from_digits(&buf, rug::integer::Order::Msf);
        if &candidate < bound {
            return candidate;
        }
    }
}

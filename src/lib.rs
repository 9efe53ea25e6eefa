//! Bob Jenkins' lookup3 hash: fast 32-bit (or dual 32-bit) checksums for
//! hash tables and fingerprints. Not a cryptographic hash.

/// Streaming lookup3 accumulator.
///
/// Each call to `update` independently absorbs its tail and runs the final
/// mix, so feeding data in several calls does not match hashing the
/// concatenation in one call. One seeded construction plus one `update` is
/// equivalent to [`checksum_with_seeds`] on the same bytes.
#[derive(Clone, Copy, Debug)]
pub struct Lookup3Hasher {
    initval0: u32,
    initval1: u32,
    a: u32,
    b: u32,
    c: u32,
}

impl Lookup3Hasher {
    /// Output size in bytes.
    pub const OUTPUT_SIZE: usize = 4;

    /// Natural processing granularity in bytes. Advisory only; `update`
    /// accepts any length.
    pub const BLOCK_SIZE: usize = 12;

    pub fn new() -> Self {
        Self::with_seeds(0, 0)
    }

    /// Create a hasher whose output space is perturbed by the seed pair.
    pub fn with_seeds(initval0: u32, initval1: u32) -> Self {
        let (a, b, c) = seed(initval0, initval1);
        Self {
            initval0,
            initval1,
            a,
            b,
            c,
        }
    }

    /// Return to the seeded initial state.
    pub fn reset(&mut self) {
        let (a, b, c) = seed(self.initval0, self.initval1);
        self.a = a;
        self.b = b;
        self.c = c;
    }

    /// Absorb a chunk of bytes.
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        let (a, b, c) = update(data.as_ref(), self.a, self.b, self.c);
        self.a = a;
        self.b = b;
        self.c = c;
    }

    /// Current 32-bit hash value. Does not mutate the state.
    pub fn sum32(&self) -> u32 {
        self.c
    }

    /// Current hash value as 4 big-endian bytes. Does not mutate the state.
    pub fn sum(&self) -> [u8; 4] {
        self.c.to_be_bytes()
    }
}

impl Default for Lookup3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl core::hash::Hasher for Lookup3Hasher {
    fn finish(&self) -> u64 {
        self.sum32() as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

/// Hash `data` with the triple seeded directly to
/// `(0xdeadbeef, 0xdeadbeef, 0xdeadbeef)`, which coincides with what the
/// seeding rule produces for the pair `(0, 0)`.
pub fn checksum(data: impl AsRef<[u8]>) -> u32 {
    let (_, _, c) = update(data.as_ref(), INITVAL, INITVAL, INITVAL);
    c
}

/// Hash `data` with the standard seeding rule applied to `(s0, s1)`.
pub fn checksum_with_seeds(data: impl AsRef<[u8]>, s0: u32, s1: u32) -> u32 {
    let (a, b, c) = seed(s0, s1);
    let (_, _, c) = update(data.as_ref(), a, b, c);
    c
}

/// Hash `data` into two 32-bit values `(c, b)`.
///
/// `c` is better mixed than `b`, so use `c` first. For a probably-unique
/// 64-bit id do `c as u64 | (b as u64) << 32`.
pub fn dual_checksum(data: impl AsRef<[u8]>, s0: u32, s1: u32) -> (u32, u32) {
    let (a, b, c) = seed(s0, s1);
    let (_, b, c) = update(data.as_ref(), a, b, c);
    (c, b)
}

/// Advance an accumulator triple over `data`.
///
/// Consumes 12-byte blocks through the reversible 6-round mix, then absorbs
/// the 0-12 byte tail and runs the 7-round final mix. Empty input returns
/// the triple unchanged; the input length is never folded into the state.
pub fn update(data: &[u8], mut a: u32, mut b: u32, mut c: u32) -> (u32, u32, u32) {
    let mut buf = data;

    // Strictly more than 12: a 12-byte input is all tail, no block.
    while buf.len() > 12 {
        a = a.wrapping_add(read_u32(buf, 0));
        b = b.wrapping_add(read_u32(buf, 4));
        c = c.wrapping_add(read_u32(buf, 8));
        mix(&mut a, &mut b, &mut c);
        buf = &buf[12..];
    }

    if buf.is_empty() {
        return (a, b, c);
    }

    // Tail bytes 0-3 fill a, 4-7 fill b, 8-11 fill c, low byte first.
    for (i, &byte) in buf.iter().enumerate() {
        let v = (byte as u32) << (8 * (i % 4));
        match i / 4 {
            0 => a = a.wrapping_add(v),
            1 => b = b.wrapping_add(v),
            _ => c = c.wrapping_add(v),
        }
    }
    final_mix(&mut a, &mut b, &mut c);

    (a, b, c)
}

#[inline(always)]
fn seed(s0: u32, s1: u32) -> (u32, u32, u32) {
    let a = INITVAL.wrapping_add(s0);
    (a, a, a.wrapping_add(s1))
}

// Native word read on little-endian hosts.
#[cfg(target_endian = "little")]
#[inline(always)]
fn read_u32(buf: &[u8], i: usize) -> u32 {
    let mut w = [0u8; 4];
    w.copy_from_slice(&buf[i..i + 4]);
    u32::from_ne_bytes(w)
}

// Little-endian byte assembly elsewhere, so the reference vectors hold on
// any host.
#[cfg(target_endian = "big")]
#[inline(always)]
fn read_u32(buf: &[u8], i: usize) -> u32 {
    (buf[i] as u32)
        | (buf[i + 1] as u32) << 8
        | (buf[i + 2] as u32) << 16
        | (buf[i + 3] as u32) << 24
}

// Reversible mix of 3 32-bit values. Rotation constants 4 6 8 16 19 4 are
// load-bearing; changing any of them changes every hash produced.
#[inline(always)]
fn mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(4);
    *c = c.wrapping_add(*b);

    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(6);
    *a = a.wrapping_add(*c);

    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(8);
    *b = b.wrapping_add(*a);

    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(16);
    *c = c.wrapping_add(*b);

    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(19);
    *a = a.wrapping_add(*c);

    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(4);
    *b = b.wrapping_add(*a);
}

// Final avalanche: every input bit of (a,b,c) affects the output c.
// Rotation constants 14 11 25 16 4 14 24.
#[inline(always)]
fn final_mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(14));

    *a ^= *c;
    *a = a.wrapping_sub(c.rotate_left(11));

    *b ^= *a;
    *b = b.wrapping_sub(a.rotate_left(25));

    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(16));

    *a ^= *c;
    *a = a.wrapping_sub(c.rotate_left(4));

    *b ^= *a;
    *b = b.wrapping_sub(a.rotate_left(14));

    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(24));
}

const INITVAL: u32 = 0xdeadbeef;

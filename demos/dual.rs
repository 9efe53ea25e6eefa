use lookup3_hash::{checksum_with_seeds, dual_checksum};

fn main() {
    let data = b"Important message";

    // dual_checksum returns two 32-bit values from one pass. c is better
    // mixed than b, so use c first. Useful for:
    // - hash tables with 2^64 buckets
    // - a second hash when the first collides
    // - probably-unique 64-bit identifiers
    let (c, b) = dual_checksum(data, 0, 0);
    println!("c = 0x{:08x}, b = 0x{:08x}", c, b);

    let id = c as u64 | (b as u64) << 32;
    println!("64-bit id: 0x{:016x}", id);

    // The primary word is the plain seeded checksum
    assert_eq!(c, checksum_with_seeds(data, 0, 0));
    println!("\nVerified: dual primary word == checksum_with_seeds");

    // Different seed pairs give independent hashes of the same data,
    // e.g. for a bloom filter with several hash functions
    println!("\nSimple bloom filter example:");
    let num_bits = 64;
    let mut bloom_filter = vec![false; num_bits];

    let item = b"example@email.com";
    for k in 0..3u32 {
        let hash = checksum_with_seeds(item, k, 0);
        let bit_index = (hash % num_bits as u32) as usize;
        bloom_filter[bit_index] = true;
        println!("  Set bit {} for hash function {}", bit_index, k);
    }
}

use lookup3_hash::{checksum, checksum_with_seeds, Lookup3Hasher};

fn main() {
    // One-shot checksum of a byte slice
    let data = b"Hello, world!";
    let hash = checksum(data);
    println!("Checksum of {:?}: 0x{:08x}", data, hash);

    // Different seeds select different hash spaces over the same input
    let seeded = checksum_with_seeds(data, 0xDEADBEEF, 42);
    println!("Seeded checksum: 0x{:08x}", seeded);

    // The streaming form, fed everything in one call, agrees with the
    // seeded one-shot form
    let mut hasher = Lookup3Hasher::with_seeds(0xDEADBEEF, 42);
    hasher.update(data);
    assert_eq!(hasher.sum32(), seeded);
    println!("Streaming form verified!");

    // Serialized output is 4 big-endian bytes
    println!("Serialized: {:02x?}", hasher.sum());

    // Demonstrate hash stability
    assert_eq!(checksum(data), hash, "Hashes should be stable!");
    println!("Hash stability verified!");
}

use blake2::{Blake2b512, Blake2s256};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::{Keccak256, Sha3_256, Sha3_512};
use std::hash::Hasher;
use twox_hash::{XxHash32, XxHash64};

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Sha3_512,
    Keccak256,
    Blake2b,
    Blake2s,
    Blake3,
    Crc32,
    XxHash32,
    XxHash64,
}

impl HashAlgorithm {
    /// Every algorithm, in catalog order.
    pub const ALL: [HashAlgorithm; 15] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Keccak256,
        HashAlgorithm::Blake2b,
        HashAlgorithm::Blake2s,
        HashAlgorithm::Blake3,
        HashAlgorithm::Crc32,
        HashAlgorithm::XxHash32,
        HashAlgorithm::XxHash64,
    ];

    /// Canonical name, also used as the transform name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Sha3_512 => "sha3-512",
            HashAlgorithm::Keccak256 => "keccak256",
            HashAlgorithm::Blake2b => "blake2b",
            HashAlgorithm::Blake2s => "blake2s",
            HashAlgorithm::Blake3 => "blake3",
            HashAlgorithm::Crc32 => "crc32",
            HashAlgorithm::XxHash32 => "xxhash32",
            HashAlgorithm::XxHash64 => "xxhash64",
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha224 => "SHA224",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha384 => "SHA384",
            HashAlgorithm::Sha512 => "SHA512",
            HashAlgorithm::Sha3_256 => "SHA3-256",
            HashAlgorithm::Sha3_512 => "SHA3-512",
            HashAlgorithm::Keccak256 => "Keccak-256",
            HashAlgorithm::Blake2b => "BLAKE2b-512",
            HashAlgorithm::Blake2s => "BLAKE2s-256",
            HashAlgorithm::Blake3 => "BLAKE3",
            HashAlgorithm::Crc32 => "CRC-32",
            HashAlgorithm::XxHash32 => "xxHash32",
            HashAlgorithm::XxHash64 => "xxHash64",
        }
    }

    /// Extra lookup names for the transform.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            HashAlgorithm::Sha1 => &["sha-1"],
            HashAlgorithm::Sha224 => &["sha-224"],
            HashAlgorithm::Sha256 => &["sha-256"],
            HashAlgorithm::Sha384 => &["sha-384"],
            HashAlgorithm::Sha512 => &["sha-512"],
            HashAlgorithm::XxHash32 => &["xxh32"],
            HashAlgorithm::XxHash64 => &["xxh64"],
            _ => &[],
        }
    }

    /// Whether the algorithm takes a seed.
    pub fn is_seeded(&self) -> bool {
        matches!(self, HashAlgorithm::XxHash32 | HashAlgorithm::XxHash64)
    }
}

fn digest<D: Digest>(data: &[u8]) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute hash of data using the specified algorithm with seed 0.
pub fn hash(data: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
    hash_with_seed(data, algorithm, 0)
}

/// Compute hash of data. `seed` only affects the xxHash variants.
pub fn hash_with_seed(data: &[u8], algorithm: HashAlgorithm, seed: u64) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Md5 => digest::<Md5>(data),
        HashAlgorithm::Sha1 => digest::<Sha1>(data),
        HashAlgorithm::Sha224 => digest::<Sha224>(data),
        HashAlgorithm::Sha256 => digest::<Sha256>(data),
        HashAlgorithm::Sha384 => digest::<Sha384>(data),
        HashAlgorithm::Sha512 => digest::<Sha512>(data),
        HashAlgorithm::Sha3_256 => digest::<Sha3_256>(data),
        HashAlgorithm::Sha3_512 => digest::<Sha3_512>(data),
        HashAlgorithm::Keccak256 => digest::<Keccak256>(data),
        HashAlgorithm::Blake2b => digest::<Blake2b512>(data),
        HashAlgorithm::Blake2s => digest::<Blake2s256>(data),
        HashAlgorithm::Blake3 => blake3::hash(data).as_bytes().to_vec(),
        HashAlgorithm::Crc32 => {
            let crc = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
            crc.checksum(data).to_be_bytes().to_vec()
        }
        HashAlgorithm::XxHash32 => {
            let mut hasher = XxHash32::with_seed(seed as u32);
            hasher.write(data);
            (hasher.finish() as u32).to_be_bytes().to_vec()
        }
        HashAlgorithm::XxHash64 => {
            let mut hasher = XxHash64::with_seed(seed);
            hasher.write(data);
            hasher.finish().to_be_bytes().to_vec()
        }
    }
}

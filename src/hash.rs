//! Pluggable hash function used throughout the protocol. SRP-6a does not
//! privilege any particular digest: RFC 5054 groups are commonly paired with
//! SHA-1, but nothing in the math requires it.

use digest::{Digest, DynDigest};
use serde::{Deserialize, Serialize};

use crate::big_number::BigNumber;

/// The hash functions this crate knows how to plug into the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// digest length in bytes.
    pub fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    fn new_hasher(self) -> Box<dyn DynDigest> {
        match self {
            HashAlgorithm::Sha1 => Box::new(sha1::Sha1::new()),
            HashAlgorithm::Sha256 => Box::new(sha2::Sha256::new()),
            HashAlgorithm::Sha384 => Box::new(sha2::Sha384::new()),
            HashAlgorithm::Sha512 => Box::new(sha2::Sha512::new()),
        }
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        HashAlgorithm::Sha512
    }
}

/// `H(chunks[0] || chunks[1] || ...)`, raw unpadded concatenation.
pub fn hash(algo: HashAlgorithm, chunks: &[&[u8]]) -> Vec<u8> {
    let mut hasher = algo.new_hasher();
    for chunk in chunks {
        hasher.update(chunk);
    }
    hasher.finalize_reset().to_vec()
}

/// `H(PAD(chunks[0]) || PAD(chunks[1]) || ...)`, each chunk left-padded to
/// `target_len` bytes before concatenation (the `PAD()` operation of
/// RFC 2945/5054).
pub fn hash_padded(algo: HashAlgorithm, target_len: usize, chunks: &[&BigNumber]) -> Vec<u8> {
    let mut hasher = algo.new_hasher();
    for chunk in chunks {
        hasher.update(&chunk.to_bytes_be_padded(target_len));
    }
    hasher.finalize_reset().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol_details::testdata;

    #[test]
    #[allow(non_snake_case)]
    fn should_hash_two_padded_big_numbers_into_u() {
        // u = H(PAD(A) | PAD(B)), official RFC 5054 appendix B vector.
        let A = BigNumber::from_bytes_be(&testdata::A_PUBLIC);
        let B = BigNumber::from_bytes_be(&testdata::B_PUBLIC);
        let u = hash_padded(HashAlgorithm::Sha1, testdata::A_PUBLIC.len(), &[&A, &B]);
        assert_eq!(u, testdata::U.to_vec());
    }

    #[test]
    fn output_len_matches_digest_size() {
        assert_eq!(hash(HashAlgorithm::Sha1, &[b"x"]).len(), HashAlgorithm::Sha1.output_len());
        assert_eq!(hash(HashAlgorithm::Sha256, &[b"x"]).len(), HashAlgorithm::Sha256.output_len());
        assert_eq!(hash(HashAlgorithm::Sha384, &[b"x"]).len(), HashAlgorithm::Sha384.output_len());
        assert_eq!(hash(HashAlgorithm::Sha512, &[b"x"]).len(), HashAlgorithm::Sha512.output_len());
    }
}

//! Negotiable protocol parameters: which group (`N`, `g`) and which hash
//! function a client/server pair agree to run SRP-6a over.

use serde::{Deserialize, Serialize};

use crate::big_number::BigNumber;
use crate::groups::Group;
use crate::hash::HashAlgorithm;
use crate::{Result, Srp6Error};

/// `N`, `g` and `H()` for one SRP-6a session. Cheap to clone: the modulus is
/// the only heap allocation and groups are shared from `'static` tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SRPParameters {
    pub modulus: BigNumber,
    pub generator: BigNumber,
    pub hash: HashAlgorithm,
    /// byte length `N` is padded to in every `PAD()` hash input.
    pub n_bytes: usize,
}

impl SRPParameters {
    /// Builds parameters from one of the built-in [`Group`]s, which are
    /// always valid, so this never fails in practice.
    pub fn new(group: Group, hash: HashAlgorithm) -> Self {
        Self::from_raw(group.modulus(), group.generator(), hash, group.num_bytes())
            .expect("built-in RFC 5054 groups are always valid")
    }

    /// Builds parameters from an arbitrary `(N, g, H)` triple, e.g. a group
    /// not among the built-ins. Rejects a generator that is not strictly
    /// between `1` and `N`, and a hash whose output would not fit within
    /// `n_bytes` (a degenerate `PAD()` target).
    pub fn from_raw(
        modulus: BigNumber,
        generator: BigNumber,
        hash: HashAlgorithm,
        n_bytes: usize,
    ) -> Result<Self> {
        if generator <= BigNumber::from(1_u32) || generator >= modulus {
            return Err(Srp6Error::BadArgument {
                message: "generator must be strictly between 1 and N".into(),
            });
        }
        if n_bytes == 0 || hash.output_len() > n_bytes {
            return Err(Srp6Error::BadArgument {
                message: "hash output length must fit within the modulus byte length".into(),
            });
        }
        Ok(Self { modulus, generator, hash, n_bytes })
    }

    pub fn group_1024_sha1() -> Self {
        Self::new(Group::G1024, HashAlgorithm::Sha1)
    }

    pub fn group_1536_sha256() -> Self {
        Self::new(Group::G1536, HashAlgorithm::Sha256)
    }

    pub fn group_2048_sha512() -> Self {
        Self::new(Group::G2048, HashAlgorithm::Sha512)
    }

    pub fn group_3072_sha512() -> Self {
        Self::new(Group::G3072, HashAlgorithm::Sha512)
    }
}

/// the 2048-bit group paired with SHA-512, a conservative, widely deployed
/// choice. Use [`SRPParameters::group_1024_sha1`] only to interoperate with
/// the RFC 5054 appendix B test vectors.
impl Default for SRPParameters {
    fn default() -> Self {
        Self::new(Group::default(), HashAlgorithm::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_2048_bit_sha512() {
        let p = SRPParameters::default();
        assert_eq!(p.n_bytes, 256);
        assert_eq!(p.hash, HashAlgorithm::Sha512);
    }

    #[test]
    fn named_constructors_match_their_group_size() {
        assert_eq!(SRPParameters::group_1024_sha1().n_bytes, 128);
        assert_eq!(SRPParameters::group_3072_sha512().n_bytes, 384);
    }

    #[test]
    fn from_raw_rejects_generator_outside_the_group() {
        let modulus = Group::G1024.modulus();
        let result = SRPParameters::from_raw(modulus.clone(), BigNumber::from(1_u32), HashAlgorithm::Sha1, 128);
        assert!(matches!(result, Err(Srp6Error::BadArgument { .. })));

        let result = SRPParameters::from_raw(modulus.clone(), modulus, HashAlgorithm::Sha1, 128);
        assert!(matches!(result, Err(Srp6Error::BadArgument { .. })));
    }

    #[test]
    fn from_raw_rejects_a_hash_longer_than_the_modulus() {
        let modulus = Group::G1024.modulus();
        let result = SRPParameters::from_raw(modulus, BigNumber::from(2_u32), HashAlgorithm::Sha512, 16);
        assert!(matches!(result, Err(Srp6Error::BadArgument { .. })));
    }
}

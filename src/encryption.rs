/*!
A post-handshake encrypted channel keyed directly by the SRP premaster
secret `S`. This is not a general-purpose AEAD: it is the minimal
hash-based construction the wire format calls for once a handshake has
produced a shared `S` on both ends, built from the same [`HashAlgorithm`]
the handshake negotiated rather than pulling in a separate cipher primitive.

`encKey`/`macKey` are domain-separated from `S` by hashing in a literal
suffix, so they never collide with each other or with `K`. The keystream
itself is a plain repeating XOR of `encKey` against `IV` — not a vetted
stream cipher, and the period (`lcm(|encKey|, 16)`) is a documented
weakness; callers must never reuse an IV under the same session secret.

Layout on the wire: `IV (16 bytes) | ciphertext (len(plaintext) bytes) | tag
(16 bytes)`.
*/
use log::warn;
use rand::RngCore;
use subtle::ConstantTimeEq;

use crate::big_number::BigNumber;
use crate::hash::{hash, HashAlgorithm};
use crate::{Result, Srp6Error};

const IV_LEN: usize = 16;
const TAG_LEN: usize = 16;

fn derive_keys(hash_algo: HashAlgorithm, s: &BigNumber) -> (Vec<u8>, Vec<u8>) {
    let s_bytes = s.to_bytes_be();
    let enc_key = hash(hash_algo, &[&s_bytes, b"encryption"]);
    let mac_key = hash(hash_algo, &[&s_bytes, b"authentication"]);
    (enc_key, mac_key)
}

/// keystream byte `i` is `encKey[i mod |encKey|] xor IV[i mod 16]`.
fn keystream(enc_key: &[u8], iv: &[u8], len: usize) -> Vec<u8> {
    (0..len).map(|i| enc_key[i % enc_key.len()] ^ iv[i % IV_LEN]).collect()
}

/// first 16 bytes of `H(macKey | IV | ciphertext)`.
fn tag(hash_algo: HashAlgorithm, mac_key: &[u8], iv: &[u8], ciphertext: &[u8]) -> [u8; TAG_LEN] {
    let digest = hash(hash_algo, &[mac_key, iv, ciphertext]);
    let mut t = [0_u8; TAG_LEN];
    t.copy_from_slice(&digest[..TAG_LEN]);
    t
}

/// Encrypts `plaintext` under the session secret `S`, using raw unpadded
/// big-endian bytes of `S` to derive `encKey`/`macKey` (not `H(PAD(S))`):
/// this is the one place in the crate that consumes `S` directly rather
/// than through `K`.
pub fn encrypt(hash_algo: HashAlgorithm, s: &BigNumber, plaintext: &[u8]) -> Vec<u8> {
    let (enc_key, mac_key) = derive_keys(hash_algo, s);
    let mut iv = vec![0_u8; IV_LEN];
    rand::thread_rng().fill_bytes(&mut iv);

    let ks = keystream(&enc_key, &iv, plaintext.len());
    let ciphertext: Vec<u8> = plaintext.iter().zip(ks.iter()).map(|(p, k)| p ^ k).collect();
    let t = tag(hash_algo, &mac_key, &iv, &ciphertext);

    let mut out = Vec::with_capacity(IV_LEN + ciphertext.len() + TAG_LEN);
    out.extend_from_slice(&iv);
    out.extend_from_slice(&ciphertext);
    out.extend_from_slice(&t);
    out
}

/// Reverses [`encrypt`]. Fails with [`Srp6Error::EncryptionTagMismatch`] if
/// the tag does not match, checked in constant time.
pub fn decrypt(hash_algo: HashAlgorithm, s: &BigNumber, wire: &[u8]) -> Result<Vec<u8>> {
    if wire.len() < IV_LEN + TAG_LEN {
        return Err(Srp6Error::MalformedCiphertext);
    }
    let (iv, rest) = wire.split_at(IV_LEN);
    let (ciphertext, given_tag) = rest.split_at(rest.len() - TAG_LEN);

    let (enc_key, mac_key) = derive_keys(hash_algo, s);
    let expected_tag = tag(hash_algo, &mac_key, iv, ciphertext);
    if expected_tag.ct_eq(given_tag).unwrap_u8() != 1 {
        warn!("encryption tag mismatch, possible tampering");
        return Err(Srp6Error::EncryptionTagMismatch);
    }

    let ks = keystream(&enc_key, iv, ciphertext.len());
    Ok(ciphertext.iter().zip(ks.iter()).map(|(c, k)| c ^ k).collect())
}

/// Convenience wrapper for decrypting to a UTF-8 string.
pub fn decrypt_to_string(hash_algo: HashAlgorithm, s: &BigNumber, wire: &[u8]) -> Result<String> {
    let bytes = decrypt(hash_algo, s, wire)?;
    String::from_utf8(bytes).map_err(|_| Srp6Error::MalformedCiphertext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_message() {
        let s = BigNumber::from(0xdead_beef_u32);
        let wire = encrypt(HashAlgorithm::Sha256, &s, b"hello there");
        let back = decrypt(HashAlgorithm::Sha256, &s, &wire).unwrap();
        assert_eq!(back, b"hello there");
    }

    #[test]
    fn rejects_tampered_ciphertext() {
        let s = BigNumber::from(42_u32);
        let mut wire = encrypt(HashAlgorithm::Sha1, &s, b"top secret");
        let last = wire.len() - 1;
        wire[last] ^= 0xff;
        assert_eq!(decrypt(HashAlgorithm::Sha1, &s, &wire), Err(Srp6Error::EncryptionTagMismatch));
    }

    #[test]
    fn rejects_wrong_key() {
        let s1 = BigNumber::from(1_u32);
        let s2 = BigNumber::from(2_u32);
        let wire = encrypt(HashAlgorithm::Sha256, &s1, b"message");
        assert!(decrypt(HashAlgorithm::Sha256, &s2, &wire).is_err());
    }

    #[test]
    fn empty_plaintext_round_trips() {
        let s = BigNumber::from(7_u32);
        let wire = encrypt(HashAlgorithm::Sha512, &s, b"");
        assert_eq!(decrypt(HashAlgorithm::Sha512, &s, &wire).unwrap(), b"");
    }

    proptest::proptest! {
        #[test]
        fn round_trips_any_plaintext_length(bytes in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..512)) {
            let s = BigNumber::from(0x1234_5678_u32);
            let wire = encrypt(HashAlgorithm::Sha256, &s, &bytes);
            let back = decrypt(HashAlgorithm::Sha256, &s, &wire).unwrap();
            proptest::prop_assert_eq!(back, bytes);
        }
    }
}

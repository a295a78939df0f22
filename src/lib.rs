/*!
An implementation of the Secure Remote Password (SRP-6a) authentication
protocol, plus a small post-handshake encrypted channel keyed by the shared
secret it produces.

**NOTE**: use at least the 2048-bit group ([`SRPParameters::group_2048_sha512`],
also the [`Default`]) in production. The 1024-bit/SHA-1 group exists only to
reproduce the RFC 5054 appendix B test vectors.

# Usage
See the `demos` directory for a full client/server handshake.

# Note on groups and hash functions
This crate ships the modulus/generator pairs vetted in [RFC5054] appendix A
as [`groups::Group`], paired with a configurable [`hash::HashAlgorithm`] via
[`parameters::SRPParameters`].

# Further details and domain vocabulary
- [variable-by-variable documentation][`protocol_details`].
- [RFC2945](https://datatracker.ietf.org/doc/html/rfc2945), the original SRP protocol.
- [RFC5054], SRP6 for TLS authentication; this crate's default parameters come from its appendix A.

[RFC5054]: https://datatracker.ietf.org/doc/html/rfc5054
*/
use derive_more::{Display, Error};

#[cfg(doc)]
pub mod protocol_details;
#[cfg(not(doc))]
mod protocol_details;

pub mod client;
pub mod encryption;
pub mod groups;
pub mod hash;
pub mod parameters;
pub(crate) mod primitives;
pub mod routines;
pub mod server;
pub mod verifier;

mod big_number;

pub use big_number::{BigNumber, BigNumberError};
pub use client::{SrpClient, SrpClientStep1, SrpClientStep2, SrpClientStep3};
pub use groups::Group;
pub use hash::HashAlgorithm;
pub use parameters::SRPParameters;
pub use primitives::{
    ClearTextPassword, Generator, MultiplierParameter, PasswordVerifier, PrimeModulus, PrivateKey,
    Proof, PublicKey, Salt, ServerHandshake, SessionKey, StrongProof, StrongSessionKey,
    UserCredentials, UserDetails, UserHandshake, Username, UsernameRef,
};
pub use server::{SrpServer, SrpServerStep1, SrpServerStep2};

/// encapsulates a [`Srp6Error`]
pub type Result<T> = std::result::Result<T, Srp6Error>;

#[derive(Error, Display, Debug, PartialEq, serde::Serialize)]
pub enum Srp6Error {
    #[display(
        "The provided key length ({given} bytes) does not match the expected ({expected} byte)"
    )]
    KeyLengthMismatch { given: usize, expected: usize },

    #[display("The provided proof is invalid")]
    InvalidProof(#[error(not(source))] Proof),

    #[display("The provided strong proof is invalid")]
    InvalidStrongProof(#[error(not(source))] StrongProof),

    #[display("The provided public key is invalid")]
    InvalidPublicKey(#[error(not(source))] PublicKey),

    #[display("The scrambling parameter u must not be zero")]
    InvalidScramblingParameter,

    #[display("No pending handshake was found for the given public key")]
    UnknownSession(#[error(not(source))] PublicKey),

    #[display("The encrypted message is too short to contain an IV and a tag")]
    MalformedCiphertext,

    #[display("The encrypted message's authentication tag did not match")]
    EncryptionTagMismatch,

    #[display("Bad argument: {message}")]
    BadArgument { message: String },

    #[display("{_0}")]
    BigNumber(BigNumberError),
}

impl From<BigNumberError> for Srp6Error {
    fn from(e: BigNumberError) -> Self {
        Srp6Error::BigNumber(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeroize::Zeroizing;

    #[cfg(feature = "norand")]
    use crate::protocol_details::testdata;

    fn run_handshake(params: SRPParameters, username: &str, password: &str) -> (BigNumber, BigNumber) {
        let password = Zeroizing::new(password.to_string());
        let user_details = verifier::generate_user_details(&params, username, password.clone()).unwrap();

        let client = SrpClient::new(params.clone()).step1(username.to_string(), password).unwrap();
        let mut server = SrpServer::new(params);

        let server_step1 = server
            .step1(&user_details, client.public_value().clone())
            .unwrap();
        let client_step2 = client
            .step2(server_step1.salt.clone(), server_step1.server_public_value.clone())
            .unwrap();
        let server_step2 = server
            .step2(server_step1.client_public_value(), client_step2.client_evidence())
            .unwrap();
        let client_step3 = client_step2.step3(server_step2.server_evidence()).unwrap();

        (
            client_step3.session_key().clone(),
            server_step2.session_key().clone(),
        )
    }

    /// Full handshake, no data transfer, matching both session keys.
    #[test]
    fn test_handshake_quick_3072() {
        let (client_key, server_key) = run_handshake(SRPParameters::group_3072_sha512(), "Bob", "secret-password");
        assert_eq!(client_key, server_key, "not same session key");
    }

    #[allow(unused_variables)]
    fn trace(title: &str, val: &str) {
        #[cfg(feature = "norand")]
        println!("{title} = {val:#}")
    }

    /// Handshake simulating data transfer (serialize/deserialize every message).
    #[test]
    fn test_handshake_serde_2048() {
        let params = SRPParameters::group_2048_sha512();
        let username = "fred".to_string();
        let password = Zeroizing::new("password_fred".to_string());

        let user_details = verifier::generate_user_details(&params, &username, password.clone()).unwrap();
        let transfer = serde_json::to_string(&user_details).unwrap();
        trace("details", &transfer);
        let user_details = serde_json::from_str::<UserDetails>(&transfer).unwrap();

        let client = SrpClient::new(params.clone()).step1(username, password).unwrap();
        let mut server = SrpServer::new(params);

        let server_step1 = server
            .step1(&user_details, client.public_value().clone())
            .unwrap();
        let transfer = serde_json::to_string(&server_step1.server_public_value).unwrap();
        trace("server_pubkey", &transfer);

        let client_step2 = client
            .step2(server_step1.salt.clone(), server_step1.server_public_value.clone())
            .unwrap();
        let transfer = serde_json::to_string(client_step2.client_evidence()).unwrap();
        trace("proof", &transfer);
        let m1 = serde_json::from_str::<Proof>(&transfer).unwrap();

        let server_step2 = server.step2(server_step1.client_public_value(), &m1).unwrap();
        let transfer = serde_json::to_string(server_step2.server_evidence()).unwrap();
        trace("sproof", &transfer);
        let m2 = serde_json::from_str::<StrongProof>(&transfer).unwrap();

        let client_step3 = client_step2.step3(&m2).unwrap();
        assert_eq!(client_step3.session_key(), server_step2.session_key());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let params = SRPParameters::default();
        let password = Zeroizing::new("correct-password".to_string());
        let user_details = verifier::generate_user_details(&params, "alice", password).unwrap();

        let wrong_password = Zeroizing::new("wrong-password".to_string());
        let client = SrpClient::new(params.clone()).step1("alice".to_string(), wrong_password).unwrap();
        let mut server = SrpServer::new(params);

        let server_step1 = server
            .step1(&user_details, client.public_value().clone())
            .unwrap();
        let client_step2 = client
            .step2(server_step1.salt.clone(), server_step1.server_public_value.clone())
            .unwrap();
        let result = server.step2(server_step1.client_public_value(), client_step2.client_evidence());
        assert!(result.is_err());
    }

    /// RFC 5054 appendix B test vectors, for `x`, `v`, `k`, `A`, `B`, `u` and
    /// `S`. `M1`/`M2`/`K` are not checked against an official vector (this
    /// crate's evidence formulas are its own), only for internal consistency
    /// elsewhere.
    #[cfg(feature = "norand")]
    #[test]
    fn test_official_vectors_1024() {
        let params = SRPParameters::group_1024_sha1();
        let username = testdata::USERNAME;
        let password = Zeroizing::new(testdata::PASSWORD.to_string());

        let user_details = verifier::generate_user_details(&params, username, password.clone()).unwrap();
        assert_eq!(
            user_details.verifier,
            PublicKey::from_bytes_be(&testdata::VERIFIER),
            "verifier nok"
        );

        let client = SrpClient::new(params.clone()).step1(username.to_string(), password).unwrap();
        assert_eq!(
            *client.public_value(),
            PublicKey::from_bytes_be(&testdata::A_PUBLIC),
            "A nok"
        );

        let mut server = SrpServer::new(params);
        let server_step1 = server
            .step1(&user_details, client.public_value().clone())
            .unwrap();
        assert_eq!(
            server_step1.server_public_value,
            PublicKey::from_bytes_be(&testdata::B_PUBLIC),
            "B nok"
        );

        let client_step2 = client
            .step2(server_step1.salt.clone(), server_step1.server_public_value.clone())
            .unwrap();
        let server_step2 = server
            .step2(server_step1.client_public_value(), client_step2.client_evidence())
            .unwrap();
        let client_step3 = client_step2.step3(server_step2.server_evidence()).unwrap();

        assert_eq!(client_step3.session_key(), server_step2.session_key());
        assert_eq!(
            *client_step3.premaster_secret(),
            PrivateKey::from_bytes_be(&testdata::SECRET),
            "S nok"
        );
    }
}

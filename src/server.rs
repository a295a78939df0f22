/*!
The server side of the handshake. Unlike the client, a server fields
concurrent handshakes from many clients (or several concurrent candidate
`A` values from the same client retrying), so [`SrpServer`] keeps a bounded
table of in-flight sessions keyed by the client's public value `A` instead
of being a single typestate chain.
*/
use std::collections::HashMap;

use log::debug;
use subtle::ConstantTimeEq;

use crate::big_number::{BigNumber, Zero};
use crate::encryption;
use crate::parameters::SRPParameters;
use crate::primitives::{
    PasswordVerifier, Proof, PublicKey, Salt, StrongProof, StrongSessionKey, UserDetails,
};
use crate::routines;
use crate::{Result, Srp6Error};

/// Sessions older than this are evicted to make room for new ones once the
/// table is full; a real deployment would also time them out, but this
/// crate leaves scheduling to the caller.
const MAX_IN_FLIGHT_SESSIONS: usize = 1024;

#[derive(Debug)]
struct PendingSession {
    #[allow(non_snake_case)]
    B: PublicKey,
    b: BigNumber,
    salt: Salt,
    username: String,
    verifier: PasswordVerifier,
}

/// Holds every handshake a server has started but not yet completed, keyed
/// by the client's public value `A`.
#[derive(Debug, Default)]
pub struct SrpServer {
    params: SRPParameters,
    sessions: HashMap<Vec<u8>, PendingSession>,
    insertion_order: Vec<Vec<u8>>,
}

impl SrpServer {
    pub fn new(params: SRPParameters) -> Self {
        Self {
            params,
            sessions: HashMap::new(),
            insertion_order: Vec::new(),
        }
    }

    /// Starts (or restarts) a handshake for one client's `A`. Returns the
    /// salt and `B` to send back.
    #[allow(non_snake_case)]
    pub fn step1(
        &mut self,
        user_details: &UserDetails,
        client_public_value: PublicKey,
    ) -> Result<SrpServerStep1> {
        let A = client_public_value;
        if !routines::is_valid_public_value(&self.params, &A) {
            return Err(Srp6Error::InvalidPublicKey(A));
        }

        let b = routines::generate_private_value(&self.params);
        let B = routines::compute_server_public_value(&self.params, &user_details.verifier, &b);

        let key = A.to_bytes_be();
        self.evict_if_full();
        self.sessions.insert(
            key.clone(),
            PendingSession {
                B: B.clone(),
                b,
                salt: user_details.salt.clone(),
                username: user_details.username.clone(),
                verifier: user_details.verifier.clone(),
            },
        );
        self.insertion_order.push(key.clone());

        Ok(SrpServerStep1 {
            salt: user_details.salt.clone(),
            server_public_value: B,
            client_public_value: A,
        })
    }

    fn evict_if_full(&mut self) {
        while self.sessions.len() >= MAX_IN_FLIGHT_SESSIONS {
            if let Some(oldest) = self.insertion_order.first().cloned() {
                self.insertion_order.remove(0);
                self.sessions.remove(&oldest);
            } else {
                break;
            }
        }
    }

    /// Verifies the client's evidence `M1` for the session keyed by `A`,
    /// producing `M2` and the encrypted channel on success.
    #[allow(non_snake_case)]
    pub fn step2(
        &mut self,
        client_public_value: &PublicKey,
        client_evidence: &Proof,
    ) -> Result<SrpServerStep2> {
        let key = client_public_value.to_bytes_be();
        let session = self
            .sessions
            .remove(&key)
            .ok_or_else(|| Srp6Error::UnknownSession(client_public_value.clone()))?;
        self.insertion_order.retain(|k| k != &key);
        debug!("verifying evidence for {:?}", &session.username);

        let u = routines::compute_u(&self.params, client_public_value, &session.B);
        if u.is_zero() {
            return Err(Srp6Error::InvalidScramblingParameter);
        }
        let S = routines::compute_server_premaster_secret(
            &self.params,
            client_public_value,
            &session.verifier,
            &session.b,
            &u,
        )?;
        let K = routines::compute_session_key(&self.params, &S);
        let expected_m1 =
            routines::compute_client_evidence(&self.params, client_public_value, &session.B, &S);

        let output_len = self.params.hash.output_len();
        let matches = expected_m1
            .to_bytes_be_padded(output_len)
            .ct_eq(&client_evidence.to_bytes_be_padded(output_len))
            .unwrap_u8();
        if matches != 1 {
            return Err(Srp6Error::InvalidProof(client_evidence.clone()));
        }

        let m2 = routines::compute_server_evidence(&self.params, client_public_value, &expected_m1, &S);

        Ok(SrpServerStep2 {
            params: self.params.clone(),
            server_evidence: m2,
            S,
            K,
        })
    }
}

#[allow(non_snake_case)]
pub struct SrpServerStep1 {
    pub salt: Salt,
    pub server_public_value: PublicKey,
    client_public_value: PublicKey,
}

impl SrpServerStep1 {
    pub fn client_public_value(&self) -> &PublicKey {
        &self.client_public_value
    }
}

/// The authenticated, encrypted channel, reached after the client's
/// evidence has checked out.
#[derive(Debug)]
pub struct SrpServerStep2 {
    params: SRPParameters,
    server_evidence: StrongProof,
    S: BigNumber,
    K: StrongSessionKey,
}

impl SrpServerStep2 {
    /// `M2`, sent back to the client so it can confirm `K`.
    pub fn server_evidence(&self) -> &StrongProof {
        &self.server_evidence
    }

    pub fn session_key(&self) -> &StrongSessionKey {
        &self.K
    }

    /// the raw premaster secret `S`; see [`Self::session_key`] for the
    /// caveat on when to prefer `K` instead.
    pub fn premaster_secret(&self) -> &BigNumber {
        &self.S
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        encryption::encrypt(self.params.hash, &self.S, plaintext)
    }

    pub fn decrypt(&self, wire: &[u8]) -> Result<Vec<u8>> {
        encryption::decrypt(self.params.hash, &self.S, wire)
    }

    pub fn decrypt_to_string(&self, wire: &[u8]) -> Result<String> {
        encryption::decrypt_to_string(self.params.hash, &self.S, wire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SrpClient;
    use zeroize::Zeroizing;

    #[test]
    fn full_handshake_round_trips_an_encrypted_message() {
        let params = SRPParameters::default();
        let username = "alice".to_string();
        let password = Zeroizing::new("hunter2".to_string());

        let user_details =
            crate::verifier::generate_user_details(&params, &username, password.clone()).unwrap();

        let client = SrpClient::new(params.clone()).step1(username, password).unwrap();
        let mut server = SrpServer::new(params);

        let server_step1 = server.step1(&user_details, client.public_value().clone()).unwrap();
        let client_step2 = client
            .step2(server_step1.salt.clone(), server_step1.server_public_value.clone())
            .unwrap();

        let server_step2 = server
            .step2(server_step1.client_public_value(), client_step2.client_evidence())
            .unwrap();
        let client_step3 = client_step2.step3(server_step2.server_evidence()).unwrap();

        assert_eq!(client_step3.session_key(), server_step2.session_key());

        let wire = client_step3.encrypt(b"hello server");
        assert_eq!(server_step2.decrypt(&wire).unwrap(), b"hello server");
    }

    #[test]
    fn wrong_password_fails_at_evidence_check() {
        let params = SRPParameters::default();
        let username = "bob".to_string();
        let password = Zeroizing::new("correct horse".to_string());
        let user_details =
            crate::verifier::generate_user_details(&params, &username, password).unwrap();

        let wrong_password = Zeroizing::new("incorrect horse".to_string());
        let client = SrpClient::new(params.clone()).step1(username, wrong_password).unwrap();
        let mut server = SrpServer::new(params);

        let server_step1 = server.step1(&user_details, client.public_value().clone()).unwrap();
        let client_step2 = client
            .step2(server_step1.salt.clone(), server_step1.server_public_value.clone())
            .unwrap();

        let result = server.step2(server_step1.client_public_value(), client_step2.client_evidence());
        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_public_value() {
        let params = SRPParameters::default();
        let user_details =
            crate::verifier::generate_user_details(&params, "eve", Zeroizing::new("pw".to_string()))
                .unwrap();
        let mut server = SrpServer::new(params);
        let result = server.step1(&user_details, BigNumber::zero());
        assert!(matches!(result, Err(Srp6Error::InvalidPublicKey(_))));
    }
}

/*!
The client side of the handshake, modeled as a typestate chain: each step
consumes `self` and returns the next step, so a client can only call
`step2` after `step1` and `step3` after `step2` — the compiler enforces the
handshake order instead of a runtime state check.
*/
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::big_number::{BigNumber, Zero};
use crate::encryption;
use crate::parameters::SRPParameters;
use crate::primitives::{Proof, PublicKey, Salt, StrongProof, StrongSessionKey, Username};
use crate::routines;
use crate::{Result, Srp6Error};

/// Entry point for a client handshake.
#[derive(Debug, Clone)]
pub struct SrpClient {
    params: SRPParameters,
}

impl SrpClient {
    pub fn new(params: SRPParameters) -> Self {
        Self { params }
    }

    /// `a = random()`, `A = g^a % N`. Sent to the server alongside `I`.
    ///
    /// Fails with [`Srp6Error::BadArgument`] if `username` is empty (after
    /// trimming) or `password` is empty.
    #[allow(non_snake_case)]
    pub fn step1(self, username: Username, password: Zeroizing<String>) -> Result<SrpClientStep1> {
        if username.trim().is_empty() {
            return Err(Srp6Error::BadArgument { message: "username must not be empty".into() });
        }
        if password.is_empty() {
            return Err(Srp6Error::BadArgument { message: "password must not be empty".into() });
        }
        let a = routines::generate_private_value(&self.params);
        let A = routines::compute_client_public_value(&self.params, &a);
        Ok(SrpClientStep1 {
            params: self.params,
            username,
            password,
            a,
            A,
        })
    }
}

#[derive(Debug)]
pub struct SrpClientStep1 {
    params: SRPParameters,
    username: Username,
    password: Zeroizing<String>,
    a: BigNumber,
    #[allow(non_snake_case)]
    A: PublicKey,
}

impl SrpClientStep1 {
    pub fn username(&self) -> &str {
        &self.username
    }

    #[allow(non_snake_case)]
    pub fn public_value(&self) -> &PublicKey {
        &self.A
    }

    /// Consumes the server's `(salt, B)`, derives `x`, `u`, `S` and `K`, and
    /// produces the client evidence `M1` to send back.
    #[allow(non_snake_case)]
    pub fn step2(self, salt: Salt, server_public_value: PublicKey) -> Result<SrpClientStep2> {
        let B = server_public_value;
        if !routines::is_valid_public_value(&self.params, &B) {
            return Err(Srp6Error::InvalidPublicKey(B));
        }
        let x = routines::compute_private_key_x(&self.params, &self.username, &self.password, &salt);
        let u = routines::compute_u(&self.params, &self.A, &B);
        if u.is_zero() {
            return Err(Srp6Error::InvalidScramblingParameter);
        }
        let S = routines::compute_client_premaster_secret(&self.params, &B, &self.A, &self.a, &x, &u)?;
        let K = routines::compute_session_key(&self.params, &S);
        let M1 = routines::compute_client_evidence(&self.params, &self.A, &B, &S);

        Ok(SrpClientStep2 {
            params: self.params,
            A: self.A,
            B,
            S,
            K,
            M1,
        })
    }
}

#[derive(Debug)]
pub struct SrpClientStep2 {
    params: SRPParameters,
    #[allow(non_snake_case)]
    A: PublicKey,
    #[allow(non_snake_case)]
    B: PublicKey,
    S: BigNumber,
    K: StrongSessionKey,
    M1: Proof,
}

impl SrpClientStep2 {
    /// `M1`, the evidence message to send to the server.
    pub fn client_evidence(&self) -> &Proof {
        &self.M1
    }

    /// Verifies the server's `M2` and transitions to the encrypted channel.
    /// Per RFC 2945, a client must not trust `K` until this check passes.
    pub fn step3(self, server_evidence: &StrongProof) -> Result<SrpClientStep3> {
        let expected = routines::compute_server_evidence(&self.params, &self.A, &self.M1, &self.S);
        let output_len = self.params.hash.output_len();
        let matches = expected
            .to_bytes_be_padded(output_len)
            .ct_eq(&server_evidence.to_bytes_be_padded(output_len))
            .unwrap_u8();
        if matches != 1 {
            return Err(Srp6Error::InvalidStrongProof(server_evidence.clone()));
        }
        Ok(SrpClientStep3 {
            params: self.params,
            S: self.S,
            K: self.K,
        })
    }
}

/// The authenticated, encrypted channel. Both peers reach this state once
/// their evidence messages have cross-checked.
#[derive(Debug)]
pub struct SrpClientStep3 {
    params: SRPParameters,
    S: BigNumber,
    K: StrongSessionKey,
}

impl SrpClientStep3 {
    pub fn session_key(&self) -> &StrongSessionKey {
        &self.K
    }

    /// the raw premaster secret `S`. Prefer [`Self::session_key`] for
    /// anything other than test vectors and debugging: `S` is what the
    /// encrypted channel is keyed from directly.
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

    #[test]
    fn rejects_empty_username() {
        let client = SrpClient::new(SRPParameters::default());
        let result = client.step1("   ".to_string(), Zeroizing::new("hunter2".to_string()));
        assert!(matches!(result, Err(Srp6Error::BadArgument { .. })));
    }

    #[test]
    fn rejects_empty_password() {
        let client = SrpClient::new(SRPParameters::default());
        let result = client.step1("alice".to_string(), Zeroizing::new(String::new()));
        assert!(matches!(result, Err(Srp6Error::BadArgument { .. })));
    }

    #[test]
    fn accepts_trimmed_nonempty_username() {
        let client = SrpClient::new(SRPParameters::default());
        let result = client.step1("alice".to_string(), Zeroizing::new("hunter2".to_string()));
        assert!(result.is_ok());
    }
}

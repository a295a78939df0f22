/*!
The arithmetic core of SRP-6a: one function per formula from the protocol
description, each taking an [`SRPParameters`] instead of being generic over a
fixed key length. Kept free of any session/state-machine concerns so both
[`crate::client`] and [`crate::server`] can share it.
*/
use log::debug;

use crate::big_number::{BigNumber, Zero};
use crate::hash::{hash, hash_padded};
use crate::parameters::SRPParameters;
use crate::primitives::{
    MultiplierParameter, PasswordVerifier, PrivateKey, Proof, PublicKey, Salt, SessionKey,
    StrongProof, StrongSessionKey, UsernameRef,
};
#[cfg(feature = "norand")]
use crate::protocol_details::testdata;
use crate::{Result, Srp6Error};

/// `k = H(N | PAD(g))`
#[allow(non_snake_case)]
pub fn compute_k(params: &SRPParameters) -> MultiplierParameter {
    let k = BigNumber::from_bytes_be(&hash(
        params.hash,
        &[&params.modulus.to_bytes_be(), &params.generator.to_bytes_be_padded(params.n_bytes)],
    ));
    debug!("k = {:?}", &k);
    k
}

/// `x = H(s | H(I | ':' | p))`
#[allow(non_snake_case)]
pub fn compute_private_key_x(
    params: &SRPParameters,
    I: UsernameRef,
    p: &str,
    s: &Salt,
) -> PrivateKey {
    let inner = hash(params.hash, &[I.as_bytes(), b":", p.as_bytes()]);
    let x = BigNumber::from_bytes_be(&hash(params.hash, &[&s.to_bytes_be(), &inner]));
    debug!("x = {:?}", &x);
    x
}

/// `v = g^x % N`, computed once at signup/registration time.
#[allow(non_snake_case)]
pub fn compute_verifier(params: &SRPParameters, x: &PrivateKey) -> PasswordVerifier {
    params.generator.modpow(x, &params.modulus).expect("group modulus is never zero")
}

/// `u = H(PAD(A) | PAD(B))`
#[allow(non_snake_case)]
pub fn compute_u(params: &SRPParameters, A: &PublicKey, B: &PublicKey) -> BigNumber {
    let u = BigNumber::from_bytes_be(&hash_padded(params.hash, params.n_bytes, &[A, B]));
    debug!("u = {:?}", &u);
    u
}

/// `A = g^a % N`
#[allow(non_snake_case)]
pub fn compute_client_public_value(params: &SRPParameters, a: &PrivateKey) -> PublicKey {
    let A = params.generator.modpow(a, &params.modulus).expect("group modulus is never zero");
    debug!("A = {:?}", &A);
    A
}

/// `B = (k*v + g^b) % N`
#[allow(non_snake_case)]
pub fn compute_server_public_value(
    params: &SRPParameters,
    v: &PasswordVerifier,
    b: &PrivateKey,
) -> PublicKey {
    let k = compute_k(params);
    let g_pow_b = params.generator.modpow(b, &params.modulus).expect("group modulus is never zero");
    let B = &(&(&k * v) + &g_pow_b) % &params.modulus;
    debug!("B = {:?}", &B);
    B
}

/// `S = (B - k*g^x) ^ (a + u*x) % N`, computed by the client.
#[allow(non_snake_case)]
pub fn compute_client_premaster_secret(
    params: &SRPParameters,
    B: &PublicKey,
    A: &PublicKey,
    a: &PrivateKey,
    x: &PrivateKey,
    u: &BigNumber,
) -> Result<SessionKey> {
    if (B % &params.modulus).is_zero() {
        return Err(Srp6Error::InvalidPublicKey(B.clone()));
    }
    let _ = A;
    let k = compute_k(params);
    let g_pow_x = params.generator.modpow(x, &params.modulus).expect("group modulus is never zero");
    let k_g_x = &(&k * &g_pow_x) % &params.modulus;
    let base = if B < &k_g_x {
        &(&params.modulus - &k_g_x) + B
    } else {
        B - &k_g_x
    };
    let exponent: BigNumber = a + &(u * x);
    let S = base.modpow(&exponent, &params.modulus)?;
    debug!("S (client) = {:?}", &S);
    Ok(S)
}

/// `S = (A * v^u) ^ b % N`, computed by the server.
#[allow(non_snake_case)]
pub fn compute_server_premaster_secret(
    params: &SRPParameters,
    A: &PublicKey,
    v: &PasswordVerifier,
    b: &PrivateKey,
    u: &BigNumber,
) -> Result<SessionKey> {
    if (A % &params.modulus).is_zero() {
        return Err(Srp6Error::InvalidPublicKey(A.clone()));
    }
    let v_pow_u = v.modpow(u, &params.modulus).expect("group modulus is never zero");
    let base = &(A * &v_pow_u) % &params.modulus;
    let S = base.modpow(b, &params.modulus)?;
    debug!("S (server) = {:?}", &S);
    Ok(S)
}

/// `K = H(PAD(S))`, the session key both sides derive once `S` is known.
#[allow(non_snake_case)]
pub fn compute_session_key(params: &SRPParameters, S: &SessionKey) -> StrongSessionKey {
    let K = BigNumber::from_bytes_be(&hash_padded(params.hash, params.n_bytes, &[S]));
    debug!("K = {:?}", &K);
    K
}

/// `M1 = H(PAD(A) | PAD(B) | PAD(S))`, the client's proof of the shared secret.
#[allow(non_snake_case)]
pub fn compute_client_evidence(
    params: &SRPParameters,
    A: &PublicKey,
    B: &PublicKey,
    S: &SessionKey,
) -> Proof {
    let M: Proof = BigNumber::from_bytes_be(&hash_padded(params.hash, params.n_bytes, &[A, B, S]));
    debug!("M1 = {:?}", &M);
    M
}

/// `M2 = H(PAD(A) | M1 | PAD(S))`, the server's proof sent back to the client.
#[allow(non_snake_case)]
pub fn compute_server_evidence(
    params: &SRPParameters,
    A: &PublicKey,
    M1: &Proof,
    S: &SessionKey,
) -> StrongProof {
    let M2: StrongProof = BigNumber::from_bytes_be(&hash_padded(params.hash, params.n_bytes, &[A, M1, S]));
    debug!("M2 = {:?}", &M2);
    M2
}

/// `s` is a fresh random salt, `16` bytes by convention.
pub fn generate_random_salt() -> Salt {
    #[cfg(not(feature = "norand"))]
    return Salt::new_rand(16);
    #[cfg(feature = "norand")]
    Salt::from_bytes_be(&testdata::SALT)
}

/// `a` or `b`, a random exponent drawn from the CSPRNG. RFC 2945 recommends
/// at least 256 bits of entropy regardless of the group size.
pub fn generate_private_value(params: &SRPParameters) -> PrivateKey {
    let _ = params;
    #[cfg(not(feature = "norand"))]
    return PrivateKey::new_rand(32);
    #[cfg(feature = "norand")]
    PrivateKey::from_bytes_be(&testdata::A_PRIVATE)
}

/// safeguard: a peer must reject `A mod N == 0` or `B mod N == 0`.
pub fn is_valid_public_value(params: &SRPParameters, value: &PublicKey) -> bool {
    !(value % &params.modulus).is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::HashAlgorithm;

    #[test]
    #[allow(non_snake_case)]
    fn client_and_server_premaster_secrets_agree() {
        let params = SRPParameters::group_2048_sha512();
        let x = compute_private_key_x(&params, "alice", "hunter2", &generate_random_salt());
        let v = compute_verifier(&params, &x);

        let a = generate_private_value(&params);
        let b = generate_private_value(&params);
        let A = compute_client_public_value(&params, &a);
        let B = compute_server_public_value(&params, &v, &b);
        let u = compute_u(&params, &A, &B);

        let client_s = compute_client_premaster_secret(&params, &B, &A, &a, &x, &u).unwrap();
        let server_s = compute_server_premaster_secret(&params, &A, &v, &b, &u).unwrap();
        assert_eq!(client_s, server_s);
    }

    #[test]
    #[allow(non_snake_case)]
    fn rejects_zero_public_value() {
        let params = SRPParameters::group_2048_sha512();
        let zero = PublicKey::zero();
        let v = compute_verifier(&params, &generate_private_value(&params));
        let b = generate_private_value(&params);
        let u = BigNumber::from(1_u32);
        assert_eq!(
            compute_server_premaster_secret(&params, &zero, &v, &b, &u),
            Err(Srp6Error::InvalidPublicKey(zero))
        );
    }

    #[test]
    fn official_1024_bit_k_matches_testdata() {
        use crate::protocol_details::testdata;
        let params = SRPParameters::group_1024_sha1();
        let k = compute_k(&params);
        assert_eq!(k, BigNumber::from_bytes_be(&testdata::K_MULTIPLIER));
    }

    #[test]
    fn hash_algorithm_default_is_sha512() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha512);
    }
}

//! Signup-time verifier generation: the one-shot computation a server runs
//! when a user registers or changes their password. Never runs again after
//! that; everything else in the crate is the handshake.

use zeroize::Zeroizing;

use crate::primitives::{UserDetails, Username, UsernameRef};
use crate::parameters::SRPParameters;
use crate::routines;
use crate::{Result, Srp6Error};

fn validate_credentials(username: UsernameRef, password: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(Srp6Error::BadArgument { message: "username must not be empty".into() });
    }
    if password.is_empty() {
        return Err(Srp6Error::BadArgument { message: "password must not be empty".into() });
    }
    Ok(())
}

/// Computes a fresh `(salt, verifier)` pair for a new user or a password
/// change. `password` is wrapped so the caller's cleartext is scrubbed from
/// memory as soon as this returns.
///
/// Fails with [`Srp6Error::BadArgument`] if `I` is empty after trimming or
/// `password` is empty.
#[allow(non_snake_case)]
pub fn generate_user_details(
    params: &SRPParameters,
    I: UsernameRef,
    password: Zeroizing<String>,
) -> Result<UserDetails> {
    validate_credentials(I, &password)?;
    let salt = routines::generate_random_salt();
    let x = routines::compute_private_key_x(params, I, &password, &salt);
    let verifier = routines::compute_verifier(params, &x);

    Ok(UserDetails {
        username: I.to_owned(),
        salt,
        verifier,
    })
}

/// Re-derives `x` and the verifier for an existing salt, e.g. when migrating
/// stored verifiers to a new group/hash pair. The salt is kept, so existing
/// evidence still lines up with the new group on the next handshake.
#[allow(non_snake_case)]
pub fn regenerate_verifier(
    params: &SRPParameters,
    username: Username,
    password: Zeroizing<String>,
    salt: crate::primitives::Salt,
) -> Result<UserDetails> {
    validate_credentials(&username, &password)?;
    let x = routines::compute_private_key_x(params, &username, &password, &salt);
    let verifier = routines::compute_verifier(params, &x);
    Ok(UserDetails {
        username,
        salt,
        verifier,
    })
}

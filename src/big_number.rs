use num_bigint::{BigUint, RandBigInt};
use rand::{thread_rng, RngCore};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::{Debug, Display, Formatter};
use thiserror::Error;

pub use num_traits::Zero;
pub use std::ops::{Add, Mul, Rem, Sub};

/// [`BigNumber`] wraps [`BigUint`] and fixes the big-endian byte order
/// mandated by RFC 5054/2945 for every conversion to and from bytes.
#[derive(PartialEq, Eq, Clone, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BigNumber(BigUint);

#[derive(Error, Debug, PartialEq)]
pub enum BigNumberError {
    #[error("invalid hex string")]
    InvalidHexStr,
    #[error("modulus must be strictly positive")]
    NonPositiveModulus,
}

impl Default for BigNumber {
    fn default() -> Self {
        Self(BigUint::new(vec![]))
    }
}

impl BigNumber {
    /// new random big number of exactly `n_bytes` bytes of entropy
    pub fn new_rand(n_bytes: usize) -> Self {
        let mut rng = thread_rng();
        Self(rng.gen_biguint((n_bytes * 8) as u64))
    }

    /// a uniform random value in `[1, bound-1]`, drawn from the CSPRNG,
    /// redrawing on the (astronomically unlikely) zero draw.
    pub fn new_rand_below(bound: &Self) -> Self {
        let mut rng = thread_rng();
        loop {
            let candidate = rng.gen_biguint_below(&bound.0);
            if !candidate.is_zero() {
                return Self(candidate);
            }
        }
    }

    /// `n` random ASCII hex characters, drawn from the CSPRNG.
    pub fn random_hex_string(n: usize) -> String {
        let mut bytes = vec![0_u8; n.div_ceil(2)];
        thread_rng().fill_bytes(&mut bytes);
        let mut s = hex::encode(bytes);
        s.truncate(n);
        s
    }

    /// `raw` is expected to be big-endian.
    pub fn from_bytes_be(raw: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(raw))
    }

    /// from a hex string; hex strings are always big-endian.
    pub fn from_hex_str_be(str: &str) -> Result<Self, BigNumberError> {
        let str = if str.len() % 2 != 0 {
            format!("{:0>len$}", str, len = (str.len() / 2 + 1) * 2)
        } else {
            str.to_owned()
        };

        Ok(Self::from_bytes_be(
            hex::decode(str).map_err(|_| BigNumberError::InvalidHexStr)?.as_slice(),
        ))
    }

    pub fn modpow(&self, exponent: &Self, modulo: &Self) -> Result<Self, BigNumberError> {
        if modulo.is_zero() {
            return Err(BigNumberError::NonPositiveModulus);
        }
        Ok(self.0.modpow(&exponent.0, &modulo.0).into())
    }

    pub fn num_bytes(&self) -> usize {
        (self.0.bits() as usize).div_ceil(8)
    }

    /// minimum-length big-endian byte encoding.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }

    /// big-endian byte encoding, left-padded with zeros to `len` bytes.
    ///
    /// Panics if the value does not fit in `len` bytes; callers validate
    /// `Nbytes` against the configured group up front, so this only fires
    /// on a misconfigured [`crate::parameters::SRPParameters`].
    pub fn to_bytes_be_padded(&self, len: usize) -> Vec<u8> {
        let raw = self.to_bytes_be();
        assert!(raw.len() <= len, "value does not fit in {len} bytes");
        let mut out = vec![0_u8; len - raw.len()];
        out.extend_from_slice(&raw);
        out
    }
}

#[test]
fn test_mod_exp() {
    let a = BigNumber::from_hex_str_be("6").unwrap();
    let p = BigNumber::from_hex_str_be("3").unwrap();
    let m = BigNumber::from_hex_str_be("7").unwrap();
    let r = a.modpow(&p, &m).unwrap();

    assert_eq!(&r, &BigNumber::from(6_u32), "{} is not 6", &r);
}

#[test]
fn modpow_rejects_zero_modulus() {
    let a = BigNumber::from(6_u32);
    let p = BigNumber::from(3_u32);
    let zero = BigNumber::zero();
    assert_eq!(a.modpow(&p, &zero), Err(BigNumberError::NonPositiveModulus));
}

impl Debug for BigNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigNumber(\"{}\")", self)
    }
}

impl From<u32> for BigNumber {
    fn from(n: u32) -> Self {
        Self(BigUint::from(n))
    }
}

impl From<BigUint> for BigNumber {
    fn from(a: BigUint) -> Self {
        Self(a)
    }
}

impl From<&[u8]> for BigNumber {
    fn from(raw: &[u8]) -> Self {
        Self::from_bytes_be(raw)
    }
}

impl From<Vec<u8>> for BigNumber {
    fn from(raw: Vec<u8>) -> Self {
        Self::from_bytes_be(&raw)
    }
}

impl From<&BigNumber> for String {
    fn from(x: &BigNumber) -> Self {
        x.0.to_str_radix(16).to_uppercase()
    }
}

impl From<BigNumber> for String {
    fn from(x: BigNumber) -> Self {
        (&x).into()
    }
}

impl TryFrom<&str> for BigNumber {
    type Error = BigNumberError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex_str_be(value)
    }
}

impl TryFrom<String> for BigNumber {
    type Error = BigNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex_str_be(value.as_str())
    }
}

#[test]
fn should_try_from_string() {
    use std::convert::TryInto;

    let s = "ab11cd".to_string();
    let x: BigNumber = s.try_into().unwrap();
    assert_eq!(x.to_bytes_be(), &[0xab, 0x11, 0xcd]);
}

#[test]
fn should_from_bytes() {
    let x = BigNumber::from_bytes_be(&[0xab, 0x11, 0xcd]);
    assert_eq!(x.to_bytes_be(), &[0xab, 0x11, 0xcd]);
}

#[test]
fn should_random_initialize() {
    let x = BigNumber::new_rand(10);
    assert_ne!(x, BigNumber::default());
}

#[test]
fn should_pad_left_with_zeros() {
    let x = BigNumber::from_bytes_be(&[0x11, 0xcd]);
    assert_eq!(x.to_bytes_be_padded(4), vec![0, 0, 0x11, 0xcd]);
}

#[test]
fn should_work_with_odd_byte_count_hex() {
    assert_eq!(BigNumber::from_hex_str_be("6").unwrap().to_string(), "6");
}

impl Rem for &BigNumber {
    type Output = BigNumber;

    fn rem(self, rhs: &BigNumber) -> Self::Output {
        (&self.0).rem(&rhs.0).into()
    }
}

#[test]
fn should_modulo_ref() {
    let a = &BigNumber::from(10_u32);
    assert_eq!(a.rem(&BigNumber::from(4_u32)), BigNumber::from(10_u32 % 4));
}

impl Rem for BigNumber {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        (&self).rem(&rhs)
    }
}

impl Mul for BigNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        (self.0 * rhs.0).into()
    }
}

impl Mul for &BigNumber {
    type Output = BigNumber;

    fn mul(self, rhs: Self) -> Self::Output {
        (&self.0 * &rhs.0).into()
    }
}

#[test]
fn test_big_num_mul() {
    let a = BigNumber::from(4_u32);
    let b = BigNumber::from(2_u32);
    assert_eq!(a * b, BigNumber::from(8_u32));
}

impl Add for BigNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.0.add(rhs.0).into()
    }
}

impl<'b> Add<&'b BigNumber> for &BigNumber {
    type Output = BigNumber;

    fn add(self, rhs: &'b BigNumber) -> Self::Output {
        (&self.0).add(&rhs.0).into()
    }
}

impl Sub for BigNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0.sub(rhs.0).into()
    }
}

#[test]
fn should_subtract() {
    let (a, b) = (BigNumber::from(6_u32), BigNumber::from(1_u32));
    assert_eq!(a - b, BigNumber::from(5_u32));
}

impl<'b> Sub<&'b BigNumber> for &BigNumber {
    type Output = BigNumber;

    fn sub(self, rhs: &'b BigNumber) -> Self::Output {
        (&self.0).sub(&rhs.0).into()
    }
}

#[test]
fn should_subtract_refs() {
    let (a, b) = (BigNumber::from(6_u32), BigNumber::from(6_u32));
    assert_eq!(&a - &b, BigNumber::from(0_u32));
}

impl Display for BigNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let x: String = self.into();
        write!(f, "{}", x)
    }
}

impl Zero for BigNumber {
    fn zero() -> Self {
        BigUint::zero().into()
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

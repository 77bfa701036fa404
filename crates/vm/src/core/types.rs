//! Numeric and hashing primitives shared by the stack, memory, gas functions and handlers.
//!
//! Words are 256-bit unsigned integers. Arithmetic wraps modulo 2^256; signed operations
//! reinterpret the same bits as two's-complement.

use alloy::primitives::{B256, I256, U256};
use lunar_common::utils::strings::sign_uint;

use crate::{core::constants::WORD_SIZE, error::Error};

/// The unit of stack storage.
pub type Word = U256;

/// `a + b` modulo 2^256.
#[inline]
pub fn add(a: Word, b: Word) -> Word {
    a.wrapping_add(b)
}

/// `a * b` modulo 2^256.
#[inline]
pub fn mul(a: Word, b: Word) -> Word {
    a.wrapping_mul(b)
}

/// Signed division of `numerator` by `denominator`, both read as two's-complement.
///
/// Division by zero yields zero and `MIN / -1` wraps back to `MIN`.
///
/// ```
/// use alloy::primitives::U256;
/// use lunar_vm::core::types::sdiv;
///
/// // 1 / -1 == -1
/// assert_eq!(sdiv(U256::from(1), U256::MAX), U256::MAX);
/// assert_eq!(sdiv(U256::from(7), U256::ZERO), U256::ZERO);
/// ```
pub fn sdiv(numerator: Word, denominator: Word) -> Word {
    if denominator.is_zero() {
        return U256::ZERO;
    }

    let numerator: I256 = sign_uint(numerator);
    let denominator: I256 = sign_uint(denominator);
    numerator.wrapping_div(denominator).into_raw()
}

/// `base` raised to `exponent`, modulo 2^256.
#[inline]
pub fn exp(base: Word, exponent: Word) -> Word {
    base.overflowing_pow(exponent).0
}

/// The number of bytes needed to represent `value` without leading zero bytes. Zero has a byte
/// length of 0.
///
/// ```
/// use alloy::primitives::U256;
/// use lunar_vm::core::types::byte_len;
///
/// assert_eq!(byte_len(U256::ZERO), 0);
/// assert_eq!(byte_len(U256::from(255)), 1);
/// assert_eq!(byte_len(U256::from(256)), 2);
/// assert_eq!(byte_len(U256::MAX), 32);
/// ```
#[inline]
pub fn byte_len(value: Word) -> u64 {
    value.bit_len().div_ceil(8) as u64
}

/// Reads a big-endian byte sequence as a word, left-padding it with zeroes.
///
/// Leading zero bytes are not significant, so sequences longer than 32 bytes are accepted as
/// long as the excess is all zeroes. Anything else fails with [`Error::Overflow`].
pub fn word_from_be_slice(bytes: &[u8]) -> Result<Word, Error> {
    let significant = match bytes.iter().position(|byte| *byte != 0) {
        Some(start) => &bytes[start..],
        None => return Ok(U256::ZERO),
    };

    U256::try_from_be_slice(significant).ok_or(Error::Overflow)
}

/// Rounds `value` up to the closest multiple of 32. Returns `None` if the result does not fit in
/// a `u64`.
///
/// ```
/// use lunar_vm::core::types::ceil32;
///
/// assert_eq!(ceil32(0), Some(0));
/// assert_eq!(ceil32(1), Some(32));
/// assert_eq!(ceil32(150), Some(160));
/// assert_eq!(ceil32(u64::MAX), None);
/// ```
#[inline]
pub fn ceil32(value: u64) -> Option<u64> {
    match value % WORD_SIZE {
        0 => Some(value),
        remainder => value.checked_add(WORD_SIZE - remainder),
    }
}

/// Keccak-256 digest of `bytes`.
#[inline]
pub fn keccak256(bytes: &[u8]) -> B256 {
    alloy::primitives::keccak256(bytes)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{b256, U256};

    use super::*;

    #[test]
    fn test_add_wraps() {
        assert_eq!(add(U256::MAX, U256::from(1)), U256::ZERO);
        assert_eq!(add(U256::MAX, U256::MAX), U256::MAX - U256::from(1));
        assert_eq!(add(U256::from(1000), U256::from(15)), U256::from(1015));
    }

    #[test]
    fn test_mul_wraps() {
        assert_eq!(mul(U256::MAX, U256::MAX), U256::from(1));
        assert_eq!(mul(U256::from(1), U256::MAX), U256::MAX);
        assert_eq!(mul(U256::from(15), U256::from(1000)), U256::from(15000));
    }

    #[test]
    fn test_sdiv_by_zero_is_zero() {
        assert_eq!(sdiv(U256::ZERO, U256::ZERO), U256::ZERO);
        assert_eq!(sdiv(U256::MAX, U256::ZERO), U256::ZERO);
        assert_eq!(sdiv(U256::from(8), U256::ZERO), U256::ZERO);
    }

    #[test]
    fn test_sdiv_signed_operands() {
        assert_eq!(sdiv(U256::from(20), U256::from(10)), U256::from(2));
        assert_eq!(sdiv(U256::from(1), U256::MAX), U256::MAX);
        assert_eq!(sdiv(U256::MAX, U256::MAX), U256::from(1));
        // -10 / 3 == -3, truncating towards zero
        let minus_ten = U256::ZERO.wrapping_sub(U256::from(10));
        let minus_three = U256::ZERO.wrapping_sub(U256::from(3));
        assert_eq!(sdiv(minus_ten, U256::from(3)), minus_three);
    }

    #[test]
    fn test_sdiv_min_by_minus_one_wraps() {
        let min = U256::from(1) << 255;
        assert_eq!(sdiv(min, U256::MAX), min);
    }

    #[test]
    fn test_exp() {
        assert_eq!(exp(U256::ZERO, U256::ZERO), U256::from(1));
        assert_eq!(exp(U256::from(2), U256::from(4)), U256::from(16));
        assert_eq!(exp(U256::from(1), U256::MAX), U256::from(1));
        assert_eq!(exp(U256::MAX, U256::MAX), U256::MAX);
        assert_eq!(
            exp(U256::from(1000), U256::from(15)),
            U256::from_str_radix("2cd76fe086b93ce2f768a00b22a00000000000", 16)
                .expect("invalid hex literal")
        );
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(byte_len(U256::from(1)), 1);
        assert_eq!(byte_len(U256::from(u64::MAX)), 8);
        assert_eq!(byte_len(U256::from(1) << 248), 32);
    }

    #[test]
    fn test_word_from_be_slice() {
        assert_eq!(word_from_be_slice(&[]), Ok(U256::ZERO));
        assert_eq!(word_from_be_slice(&[0]), Ok(U256::ZERO));
        assert_eq!(word_from_be_slice(&[255]), Ok(U256::from(255)));
        assert_eq!(word_from_be_slice(&[1, 0]), Ok(U256::from(256)));
        assert_eq!(word_from_be_slice(&[0x05, 0xff]), Ok(U256::from(1535)));
        assert_eq!(word_from_be_slice(&[0xff; 32]), Ok(U256::MAX));
    }

    #[test]
    fn test_word_from_be_slice_ignores_leading_zeroes() {
        let mut bytes = vec![0u8; 40];
        bytes[39] = 1;
        assert_eq!(word_from_be_slice(&bytes), Ok(U256::from(1)));
    }

    #[test]
    fn test_word_from_be_slice_overflow() {
        let mut bytes = vec![0u8; 33];
        bytes[0] = 1;
        assert_eq!(word_from_be_slice(&bytes), Err(Error::Overflow));
    }

    #[test]
    fn test_ceil32() {
        assert_eq!(ceil32(31), Some(32));
        assert_eq!(ceil32(32), Some(32));
        assert_eq!(ceil32(33), Some(64));
        assert_eq!(ceil32(u64::MAX - 31), Some(u64::MAX - 31));
    }

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            keccak256(&[]),
            b256!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
    }
}

use std::str::FromStr;

use alloy::dyn_abi::DynSolValue;
use alloy::primitives::{Address, B256, U256};
use displaydoc::Display;
use thiserror::Error;

use crate::calls::ParamKind;

/// Represents errors raised while checking call arguments before dispatch.
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum Error {
    /// Invalid `{name}` argument: {reason}
    InvalidArgument { name: &'static str, reason: String },
    /// `{value}` does not fit in a 32 byte word ({len} bytes)
    EncodingOverflow { value: String, len: usize },
}

/// Checks that `value` matches the declared semantic type of a parameter.
///
/// Numeric parameters must parse as unsigned 256-bit decimal integers and
/// address parameters as 20-byte hex addresses. Text and word parameters are
/// shape-valid as they stand; width is enforced by the sanitizer.
pub fn check(kind: ParamKind, name: &'static str, value: &str) -> Result<(), Error> {
    match kind {
        ParamKind::Text | ParamKind::Bytes32 => Ok(()),
        ParamKind::Numeric => U256::from_str(value)
            .map(drop)
            .map_err(|e| Error::InvalidArgument {
                name,
                reason: e.to_string(),
            }),
        ParamKind::Address => Address::from_str(value)
            .map(drop)
            .map_err(|e| Error::InvalidArgument {
                name,
                reason: e.to_string(),
            }),
    }
}

/// Converts a checked parameter to the ABI value the contract interface
/// expects. Word-typed parameters go through the sanitizer.
pub fn encode(kind: ParamKind, name: &'static str, value: &str) -> Result<DynSolValue, Error> {
    match kind {
        ParamKind::Text => Ok(DynSolValue::String(value.to_owned())),
        ParamKind::Numeric => U256::from_str(value)
            .map(|n| DynSolValue::Uint(n, 256))
            .map_err(|e| Error::InvalidArgument {
                name,
                reason: e.to_string(),
            }),
        ParamKind::Address => Address::from_str(value)
            .map(DynSolValue::Address)
            .map_err(|e| Error::InvalidArgument {
                name,
                reason: e.to_string(),
            }),
        ParamKind::Bytes32 => to_bytes32(value).map(|word| DynSolValue::FixedBytes(word, 32)),
    }
}

/// Encodes short text into the fixed 32-byte word used by the contract
/// interface: UTF-8 bytes, left-aligned, right-padded with zeros. The empty
/// string encodes to the all-zero word.
pub fn to_bytes32(value: &str) -> Result<B256, Error> {
    let bytes = value.as_bytes();
    if bytes.len() > 32 {
        return Err(Error::EncodingOverflow {
            value: value.to_owned(),
            len: bytes.len(),
        });
    }
    let mut word = [0u8; 32];
    word[..bytes.len()].copy_from_slice(bytes);
    log::trace!("Encoded {:?} as 0x{}", value, hex::encode(word));
    Ok(B256::new(word))
}

/// Decodes a 32-byte word back into text, dropping the zero padding.
pub fn from_bytes32(word: &B256) -> String {
    let bytes = word.as_slice();
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_text_to_a_full_word() {
        let word = to_bytes32("PPV").unwrap();
        assert_eq!(hex::encode(word), format!("505056{}", "00".repeat(29)));
    }

    #[test]
    fn encoding_is_deterministic() {
        assert_eq!(to_bytes32("news").unwrap(), to_bytes32("news").unwrap());
    }

    #[test]
    fn empty_text_encodes_to_the_zero_word() {
        assert_eq!(to_bytes32("").unwrap(), B256::ZERO);
    }

    #[test]
    fn exactly_32_bytes_fit() {
        let value = "a".repeat(32);
        let word = to_bytes32(&value).unwrap();
        assert_eq!(from_bytes32(&word), value);
    }

    #[test]
    fn over_32_bytes_overflow() {
        let value = "a".repeat(33);
        assert!(matches!(
            to_bytes32(&value),
            Err(Error::EncodingOverflow { len: 33, .. })
        ));
    }

    #[test]
    fn multibyte_text_counts_utf8_bytes() {
        // Eleven four-byte scorpions exceed the word size.
        let value = "\u{1F982}".repeat(11);
        assert!(matches!(
            to_bytes32(&value),
            Err(Error::EncodingOverflow { len: 44, .. })
        ));
    }

    #[test]
    fn sanitization_is_idempotent_after_decoding() {
        for value in ["PPV", "AD", "FREE", "", "a longer category name"] {
            let once = to_bytes32(value).unwrap();
            let again = to_bytes32(&from_bytes32(&once)).unwrap();
            assert_eq!(once, again);
        }
    }

    #[test]
    fn numeric_values_must_be_unsigned_integers() {
        assert!(check(ParamKind::Numeric, "price", "100").is_ok());
        assert!(check(ParamKind::Numeric, "price", "0").is_ok());
        for bad in ["", "12.5", "-3", "ten"] {
            assert!(matches!(
                check(ParamKind::Numeric, "price", bad),
                Err(Error::InvalidArgument { name: "price", .. })
            ));
        }
    }

    #[test]
    fn addresses_must_be_20_byte_hex() {
        assert!(check(ParamKind::Address, "token", "0x5FbDB2315678afecb367f032d93F642f64180aa3").is_ok());
        for bad in ["", "0x1234", "not-an-address"] {
            assert!(matches!(
                check(ParamKind::Address, "token", bad),
                Err(Error::InvalidArgument { name: "token", .. })
            ));
        }
    }

    #[test]
    fn any_text_is_shape_valid() {
        assert!(check(ParamKind::Text, "tokenURI", "").is_ok());
        assert!(check(ParamKind::Bytes32, "category", "a".repeat(100).as_str()).is_ok());
    }

    #[test]
    fn encode_produces_abi_values() {
        assert_eq!(
            encode(ParamKind::Text, "tokenURI", "ipfs://abc").unwrap(),
            DynSolValue::String("ipfs://abc".into())
        );
        assert_eq!(
            encode(ParamKind::Numeric, "price", "100").unwrap(),
            DynSolValue::Uint(U256::from(100u64), 256)
        );
        assert_eq!(
            encode(ParamKind::Bytes32, "category", "PPV").unwrap(),
            DynSolValue::FixedBytes(to_bytes32("PPV").unwrap(), 32)
        );
    }
}
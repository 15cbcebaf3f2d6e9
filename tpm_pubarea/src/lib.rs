//! tpm_pubarea - TPM public area validation for WebAuthn attestation
//!
//! This crate checks that the key a TPM describes in its binary "public
//! area" structure is the same key a WebAuthn credential presents in COSE
//! form, and computes the public area's TPM name digest so a caller can
//! bind the TPM's certification statement to that exact key.
//!
//! CBOR decoding of the surrounding attestation statement, COSE key
//! decoding, and certificate chain validation are the caller's job; this
//! crate operates on the raw public area bytes and an already-decoded
//! [`CoseKey`].

mod constants;
mod cose;
mod errors;
mod pub_area;

pub use cose::CoseKey;
pub use errors::PubAreaError;
pub use pub_area::{AsymParameters, KeyType, PubArea};

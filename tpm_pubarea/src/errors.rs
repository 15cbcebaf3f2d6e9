use thiserror::Error;

/// Errors that can occur while parsing or validating a TPM public area.
///
/// Comparison mismatches are not errors: [`crate::PubArea::matches_credential_key`]
/// absorbs them into its boolean result. Only conditions that make the
/// comparison itself impossible surface here.
#[derive(Debug, Error)]
pub enum PubAreaError {
    /// The buffer is truncated or a length-prefixed field overruns it
    #[error("Malformed TPM public area: {0}")]
    MalformedStructure(String),

    /// The TPM structure's type or the credential key's variant is neither ECC nor RSA
    #[error("Unsupported key type: {0}")]
    UnsupportedKeyType(String),

    /// The nameAlg identifier has no corresponding hash function
    #[error("Unsupported TPM hash algorithm: {0:#06x}")]
    UnsupportedHashAlgorithm(u16),
}

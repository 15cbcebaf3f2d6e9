//! TPM and COSE identifier constants and the fixed translation tables
//! between the two numbering systems.
//!
//! Every lookup is total: an id without an entry yields `None`, never a
//! default. Extending algorithm support means adding entries here.

// TPM_ALG_ID values (TPM 2.0 Structures specification, Table 9)
pub(crate) const TPM_ALG_RSA: u16 = 0x0001;
pub(crate) const TPM_ALG_SHA256: u16 = 0x000B;
pub(crate) const TPM_ALG_SHA384: u16 = 0x000C;
pub(crate) const TPM_ALG_SHA512: u16 = 0x000D;
pub(crate) const TPM_ALG_NULL: u16 = 0x0010;
pub(crate) const TPM_ALG_RSASSA: u16 = 0x0014;
pub(crate) const TPM_ALG_RSAPSS: u16 = 0x0016;
pub(crate) const TPM_ALG_ECDSA: u16 = 0x0018;
pub(crate) const TPM_ALG_ECC: u16 = 0x0023;

// TPM_ECC_CURVE values (TPM 2.0 Structures specification, Table 10)
pub(crate) const TPM_ECC_NIST_P256: u16 = 0x0003;
pub(crate) const TPM_ECC_NIST_P384: u16 = 0x0004;
pub(crate) const TPM_ECC_NIST_P521: u16 = 0x0005;

// COSE algorithm identifiers (RFC 9053)
pub(crate) const COSE_ALG_ES256: i64 = -7;
pub(crate) const COSE_ALG_ES384: i64 = -35;
pub(crate) const COSE_ALG_ES512: i64 = -36;
pub(crate) const COSE_ALG_PS256: i64 = -37;
pub(crate) const COSE_ALG_PS384: i64 = -38;
pub(crate) const COSE_ALG_PS512: i64 = -39;
pub(crate) const COSE_ALG_RS256: i64 = -257;
pub(crate) const COSE_ALG_RS384: i64 = -258;
pub(crate) const COSE_ALG_RS512: i64 = -259;

// COSE elliptic curve identifiers (RFC 9053)
pub(crate) const COSE_CRV_P256: i64 = 1;
pub(crate) const COSE_CRV_P384: i64 = 2;
pub(crate) const COSE_CRV_P521: i64 = 3;

/// TPM signature scheme corresponding to a COSE EC algorithm id.
///
/// The TPM scheme id does not encode the hash, so the whole ECDSA family
/// maps to the same scheme.
pub(crate) fn ec_signature_scheme(cose_alg: i64) -> Option<u16> {
    match cose_alg {
        COSE_ALG_ES256 | COSE_ALG_ES384 | COSE_ALG_ES512 => Some(TPM_ALG_ECDSA),
        _ => None,
    }
}

/// TPM signature scheme corresponding to a COSE RSA algorithm id.
pub(crate) fn rsa_signature_scheme(cose_alg: i64) -> Option<u16> {
    match cose_alg {
        COSE_ALG_RS256 | COSE_ALG_RS384 | COSE_ALG_RS512 => Some(TPM_ALG_RSASSA),
        COSE_ALG_PS256 | COSE_ALG_PS384 | COSE_ALG_PS512 => Some(TPM_ALG_RSAPSS),
        _ => None,
    }
}

/// TPM curve identifier corresponding to a COSE curve id.
pub(crate) fn tpm_curve(cose_crv: i64) -> Option<u16> {
    match cose_crv {
        COSE_CRV_P256 => Some(TPM_ECC_NIST_P256),
        COSE_CRV_P384 => Some(TPM_ECC_NIST_P384),
        COSE_CRV_P521 => Some(TPM_ECC_NIST_P521),
        _ => None,
    }
}

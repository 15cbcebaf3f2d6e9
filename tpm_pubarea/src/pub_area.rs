use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::constants::{
    TPM_ALG_ECC, TPM_ALG_NULL, TPM_ALG_RSA, TPM_ALG_SHA256, TPM_ALG_SHA384, TPM_ALG_SHA512,
    ec_signature_scheme, rsa_signature_scheme, tpm_curve,
};
use crate::cose::CoseKey;
use crate::errors::PubAreaError;

/// Asymmetric algorithm family of a TPM public area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    Ecc,
    Rsa,
}

/// Algorithm-specific parameters of a TPM public area.
///
/// The variant always matches the area's [`KeyType`]; the decoder rejects
/// any other type tag before reading parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsymParameters {
    Ecc {
        symmetric: u16,
        scheme: u16,
        curve_id: u16,
        kdf: u16,
    },
    Rsa {
        symmetric: u16,
        scheme: u16,
        key_bits: u16,
        exponent: u32,
    },
}

/// A decoded TPM public area (TPMT_PUBLIC).
///
/// Produced once per raw buffer by [`PubArea::parse`] and read-only
/// afterwards. The input bytes are retained because the TPM name digest
/// covers the exact encoding the attestation carried, trailing bytes
/// included.
#[derive(Debug, Clone)]
pub struct PubArea {
    raw: Vec<u8>,
    key_type: KeyType,
    name_alg: u16,
    object_attributes: u32,
    auth_policy: Vec<u8>,
    parameters: AsymParameters,
    unique: Vec<u8>,
}

fn take<'a>(
    data: &'a [u8],
    offset: &mut usize,
    len: usize,
    field: &str,
) -> Result<&'a [u8], PubAreaError> {
    if data.len() < *offset + len {
        return Err(PubAreaError::MalformedStructure(format!(
            "TPM public area too short to parse {}",
            field
        )));
    }
    let bytes = &data[*offset..*offset + len];
    *offset += len;
    Ok(bytes)
}

fn read_u16(data: &[u8], offset: &mut usize, field: &str) -> Result<u16, PubAreaError> {
    let bytes = take(data, offset, 2, field)?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

fn read_u32(data: &[u8], offset: &mut usize, field: &str) -> Result<u32, PubAreaError> {
    let bytes = take(data, offset, 4, field)?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

// TPM2B buffer: 2-byte big-endian length followed by that many bytes.
fn read_sized(data: &[u8], offset: &mut usize, field: &str) -> Result<Vec<u8>, PubAreaError> {
    let len = read_u16(data, offset, field)? as usize;
    let bytes = take(data, offset, len, field)?;
    Ok(bytes.to_vec())
}

impl PubArea {
    /// Parses a big-endian TPMT_PUBLIC structure.
    ///
    /// Trailing bytes after the `unique` field are ignored, so the
    /// structure may sit at the start of a larger buffer. Truncated
    /// buffers and length fields that overrun the buffer fail with
    /// [`PubAreaError::MalformedStructure`]; a type tag other than ECC or
    /// RSA fails with [`PubAreaError::UnsupportedKeyType`].
    pub fn parse(data: &[u8]) -> Result<Self, PubAreaError> {
        let mut offset = 0;

        let raw_type = read_u16(data, &mut offset, "type")?;
        let name_alg = read_u16(data, &mut offset, "nameAlg")?;
        let object_attributes = read_u32(data, &mut offset, "objectAttributes")?;
        let auth_policy = read_sized(data, &mut offset, "authPolicy")?;

        let (key_type, parameters) = match raw_type {
            TPM_ALG_ECC => {
                let symmetric = read_u16(data, &mut offset, "ECC symmetric algorithm")?;
                let scheme = read_u16(data, &mut offset, "ECC scheme")?;
                let curve_id = read_u16(data, &mut offset, "ECC curveID")?;
                let kdf = read_u16(data, &mut offset, "ECC kdf")?;
                (
                    KeyType::Ecc,
                    AsymParameters::Ecc {
                        symmetric,
                        scheme,
                        curve_id,
                        kdf,
                    },
                )
            }
            TPM_ALG_RSA => {
                let symmetric = read_u16(data, &mut offset, "RSA symmetric algorithm")?;
                let scheme = read_u16(data, &mut offset, "RSA scheme")?;
                let key_bits = read_u16(data, &mut offset, "RSA keyBits")?;
                let exponent = read_u32(data, &mut offset, "RSA exponent")?;
                // Zero on the wire encodes the default RSA exponent
                let exponent = if exponent == 0 { 65537 } else { exponent };
                (
                    KeyType::Rsa,
                    AsymParameters::Rsa {
                        symmetric,
                        scheme,
                        key_bits,
                        exponent,
                    },
                )
            }
            other => {
                return Err(PubAreaError::UnsupportedKeyType(format!(
                    "TPM algorithm type {:#06x}",
                    other
                )));
            }
        };

        let unique = read_sized(data, &mut offset, "unique")?;

        Ok(PubArea {
            raw: data.to_vec(),
            key_type,
            name_alg,
            object_attributes,
            auth_policy,
            parameters,
            unique,
        })
    }

    /// Checks whether this public area and a credential public key
    /// describe the same key.
    ///
    /// Any mismatch yields `Ok(false)`, including scheme or curve ids the
    /// translation tables do not map. Only a credential key that is
    /// neither EC2 nor RSA is an error, since no comparison is possible
    /// for it.
    pub fn matches_credential_key(&self, key: &CoseKey) -> Result<bool, PubAreaError> {
        match key {
            CoseKey::Ec2 { alg, crv, x, y } => Ok(self.matches_ec2(*alg, *crv, x, y)),
            CoseKey::Rsa { alg, n, .. } => Ok(self.matches_rsa(*alg, n)),
            CoseKey::Other { kty } => Err(PubAreaError::UnsupportedKeyType(format!(
                "COSE key type {}",
                kty
            ))),
        }
    }

    fn matches_ec2(&self, alg: i64, crv: i64, x: &[u8], y: &[u8]) -> bool {
        let (symmetric, scheme, curve_id) = match self.parameters {
            AsymParameters::Ecc {
                symmetric,
                scheme,
                curve_id,
                ..
            } => (symmetric, scheme, curve_id),
            AsymParameters::Rsa { .. } => {
                tracing::debug!("EC2 credential key compared against an RSA public area");
                return false;
            }
        };

        if !symmetric_is_null(symmetric) {
            return false;
        }

        if !scheme_allows(scheme, ec_signature_scheme(alg)) {
            tracing::debug!(
                "TPM scheme {:#06x} does not allow COSE algorithm {}",
                scheme,
                alg
            );
            return false;
        }

        if tpm_curve(crv) != Some(curve_id) {
            tracing::debug!(
                "TPM curve {:#06x} does not match COSE curve {}",
                curve_id,
                crv
            );
            return false;
        }

        self.unique == [x, y].concat()
    }

    fn matches_rsa(&self, alg: i64, n: &[u8]) -> bool {
        let (symmetric, scheme, key_bits) = match self.parameters {
            AsymParameters::Rsa {
                symmetric,
                scheme,
                key_bits,
                ..
            } => (symmetric, scheme, key_bits),
            AsymParameters::Ecc { .. } => {
                tracing::debug!("RSA credential key compared against an ECC public area");
                return false;
            }
        };

        if !symmetric_is_null(symmetric) {
            return false;
        }

        if !scheme_allows(scheme, rsa_signature_scheme(alg)) {
            tracing::debug!(
                "TPM scheme {:#06x} does not allow COSE algorithm {}",
                scheme,
                alg
            );
            return false;
        }

        if key_bits as usize != n.len() * 8 {
            tracing::debug!(
                "TPM keyBits {} does not match modulus of {} bytes",
                key_bits,
                n.len()
            );
            return false;
        }

        self.unique == n
    }

    /// Computes the TPM name of this public area: the big-endian nameAlg
    /// identifier followed by the digest of the raw structure under the
    /// hash that identifier denotes.
    pub fn name(&self) -> Result<Vec<u8>, PubAreaError> {
        let digest = match self.name_alg {
            TPM_ALG_SHA256 => {
                let mut hasher = Sha256::new();
                hasher.update(&self.raw);
                hasher.finalize().to_vec()
            }
            TPM_ALG_SHA384 => {
                let mut hasher = Sha384::new();
                hasher.update(&self.raw);
                hasher.finalize().to_vec()
            }
            TPM_ALG_SHA512 => {
                let mut hasher = Sha512::new();
                hasher.update(&self.raw);
                hasher.finalize().to_vec()
            }
            other => return Err(PubAreaError::UnsupportedHashAlgorithm(other)),
        };

        let mut name = Vec::with_capacity(2 + digest.len());
        name.extend_from_slice(&self.name_alg.to_be_bytes());
        name.extend_from_slice(&digest);
        Ok(name)
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn name_alg(&self) -> u16 {
        self.name_alg
    }

    pub fn object_attributes(&self) -> u32 {
        self.object_attributes
    }

    pub fn auth_policy(&self) -> &[u8] {
        &self.auth_policy
    }

    pub fn parameters(&self) -> &AsymParameters {
        &self.parameters
    }

    /// Raw public key material: EC point coordinates concatenated, or the
    /// RSA modulus.
    pub fn unique(&self) -> &[u8] {
        &self.unique
    }
}

// A TPM key configured with a symmetric cipher is a storage/decryption
// key and is never acceptable as a credential signing key.
fn symmetric_is_null(symmetric: u16) -> bool {
    symmetric == TPM_ALG_NULL
}

// The scheme is either unconstrained (null) or must name exactly the
// scheme the credential algorithm maps to. An unmapped algorithm id never
// satisfies a non-null scheme.
fn scheme_allows(scheme: u16, expected: Option<u16>) -> bool {
    scheme == TPM_ALG_NULL || Some(scheme) == expected
}

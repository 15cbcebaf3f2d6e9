/// A credential public key already decoded from its COSE representation.
///
/// Decoding the CBOR map itself is the caller's job; this crate only
/// compares the decoded fields against a TPM public area.
#[derive(Debug, Clone)]
pub enum CoseKey {
    /// EC2 key: COSE algorithm id, curve id, and point coordinates
    Ec2 {
        alg: i64,
        crv: i64,
        x: Vec<u8>,
        y: Vec<u8>,
    },
    /// RSA key: COSE algorithm id, modulus, and public exponent
    Rsa { alg: i64, n: Vec<u8>, e: Vec<u8> },
    /// Any other COSE key type; no TPM comparison is possible for these
    Other { kty: i64 },
}

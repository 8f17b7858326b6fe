use crate::error::*;
use crate::keys::ecdsa::EcDsaKeyMaterial;
use openssl::ec::EcKey;
use zeroize::Zeroizing;

/// Decode an OpenSSL `EC PRIVATE KEY` (SEC1 ECPrivateKey, RFC 5915)
pub fn decode_sec1(keyder: &[u8]) -> KeyprintResult<EcDsaKeyMaterial> {
    let ec = EcKey::private_key_from_der(keyder)
        .map_err(|e| Error::with_error(ErrorKind::MalformedKeyEncoding, e))?;
    EcDsaKeyMaterial::from_ossl_ec(ec)
}

/// Encode to the SEC1 ECPrivateKey DER structure
///
/// The output contains the named curve and the public point.
pub fn encode_sec1(ec: &EcDsaKeyMaterial) -> KeyprintResult<Zeroizing<Vec<u8>>> {
    let der = ec
        .ossl_ec()
        .private_key_to_der()
        .map_err(|e| Error::with_error(ErrorKind::DerEncodingFailure, e))?;
    Ok(Zeroizing::new(der))
}

use crate::error::*;
use crate::keys::rsa::RsaKeyMaterial;
use openssl::rsa::Rsa;
use zeroize::Zeroizing;

/// Decode an OpenSSL `RSA PRIVATE KEY` (PKCS#1 RSAPrivateKey)
pub fn decode_pkcs1(keyder: &[u8]) -> KeyprintResult<RsaKeyMaterial> {
    let rsa = Rsa::private_key_from_der(keyder)
        .map_err(|e| Error::with_error(ErrorKind::MalformedKeyEncoding, e))?;
    Ok(RsaKeyMaterial::from_ossl_rsa(rsa))
}

/// Encode to the PKCS#1 RSAPrivateKey DER structure
pub fn encode_pkcs1(rsa: &RsaKeyMaterial) -> KeyprintResult<Zeroizing<Vec<u8>>> {
    let der = rsa
        .ossl_rsa()
        .private_key_to_der()
        .map_err(|e| Error::with_error(ErrorKind::DerEncodingFailure, e))?;
    Ok(Zeroizing::new(der))
}

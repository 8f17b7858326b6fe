use super::{pkcs1, sec1};
use crate::error::*;
use crate::keys::KeyMaterial;
use openssl::pkey::PKey;
use pkcs8::der::{AnyRef, Decode, Encode};
use pkcs8::{AlgorithmIdentifierRef, ObjectIdentifier, PrivateKeyInfo, Version};
use zeroize::Zeroizing;

/// `rsaEncryption` from PKCS#1
pub const RSA_ENCRYPTION_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
/// `id-ecPublicKey` from RFC 5480
pub const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// Algorithm identifier of RSA keys in the canonical PKCS#8 form
pub const RSA_ALGORITHM: AlgorithmIdentifierRef<'static> = AlgorithmIdentifierRef {
    oid: RSA_ENCRYPTION_OID,
    parameters: Some(AnyRef::NULL),
};
/// Algorithm identifier of EC keys in the canonical PKCS#8 form
///
/// The curve is named inside the EC private key itself, so the parameters are NULL here.
pub const EC_ALGORITHM: AlgorithmIdentifierRef<'static> = AlgorithmIdentifierRef {
    oid: EC_PUBLIC_KEY_OID,
    parameters: Some(AnyRef::NULL),
};

/// A PKCS#8 `PrivateKeyInfo` (RFC 5208) without the optional attributes
///
/// ```text
/// PrivateKeyInfo ::= SEQUENCE {
///     version             INTEGER (0),
///     privateKeyAlgorithm AlgorithmIdentifier,
///     privateKey          OCTET STRING }
/// ```
#[derive(Debug, Clone)]
pub struct Pkcs8Document {
    algorithm: AlgorithmIdentifierRef<'static>,
    private_key: Zeroizing<Vec<u8>>,
}

impl Pkcs8Document {
    /// The only version this crate produces
    pub const VERSION: u8 = 0;

    pub(crate) fn new(
        algorithm: AlgorithmIdentifierRef<'static>,
        private_key: Zeroizing<Vec<u8>>,
    ) -> Self {
        Pkcs8Document {
            algorithm,
            private_key,
        }
    }

    /// Parse a document previously produced by [`to_der()`](#method.to_der)
    pub fn from_der(der: &[u8]) -> KeyprintResult<Self> {
        let info = PrivateKeyInfo::from_der(der)
            .map_err(|e| Error::with_error(ErrorKind::MalformedKeyEncoding, e))?;
        if info.version() != Version::V1 {
            return Err(ErrorKind::MalformedKeyEncoding.into());
        }
        let algorithm = if info.algorithm == RSA_ALGORITHM {
            RSA_ALGORITHM
        } else if info.algorithm == EC_ALGORITHM {
            EC_ALGORITHM
        } else if info.algorithm.oid == RSA_ENCRYPTION_OID
            || info.algorithm.oid == EC_PUBLIC_KEY_OID
        {
            // Known algorithm, but not in the canonical form
            return Err(ErrorKind::MalformedKeyEncoding.into());
        } else {
            return Err(ErrorKind::UnsupportedAlgorithm.into());
        };

        Ok(Pkcs8Document {
            algorithm,
            private_key: Zeroizing::new(info.private_key.to_vec()),
        })
    }

    pub fn version(&self) -> u8 {
        Self::VERSION
    }

    pub fn algorithm(&self) -> AlgorithmIdentifierRef<'static> {
        self.algorithm
    }

    /// The algorithm specific private key structure wrapped in the octet string
    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    /// Serialize to DER
    pub fn to_der(&self) -> KeyprintResult<Zeroizing<Vec<u8>>> {
        let info = PrivateKeyInfo::new(self.algorithm, &self.private_key);
        let der = info
            .to_der()
            .map_err(|e| Error::with_error(ErrorKind::DerEncodingFailure, e))?;
        Ok(Zeroizing::new(der))
    }
}

/// Decode an unencrypted `PRIVATE KEY` block
///
/// The canonical forms written by [`Pkcs8Document::to_der()`] are decoded directly.
/// EC keys carrying the named curve as algorithm parameters go through OpenSSL.
pub fn decode_pkcs8(keyder: &[u8]) -> KeyprintResult<KeyMaterial> {
    let info = PrivateKeyInfo::from_der(keyder)
        .map_err(|e| Error::with_error(ErrorKind::MalformedKeyEncoding, e))?;

    if info.algorithm == RSA_ALGORITHM {
        Ok(pkcs1::decode_pkcs1(info.private_key)?.into())
    } else if info.algorithm == EC_ALGORITHM {
        // The curve is named inside the SEC1 structure
        Ok(sec1::decode_sec1(info.private_key)?.into())
    } else if info.algorithm.oid == RSA_ENCRYPTION_OID || info.algorithm.oid == EC_PUBLIC_KEY_OID
    {
        let pkey = PKey::private_key_from_pkcs8(keyder)
            .map_err(|e| Error::with_error(ErrorKind::MalformedKeyEncoding, e))?;
        KeyMaterial::from_ossl_pkey(&pkey)
    } else {
        Err(ErrorKind::UnsupportedAlgorithm.into())
    }
}

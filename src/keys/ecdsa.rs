use super::{Key, PrivateParts};
use crate::error::{Error, ErrorKind, KeyprintResult};
use crate::format::pkcs8::EC_ALGORITHM;
use crate::format::sec1::encode_sec1;
use openssl::bn::BigNumContext;
use openssl::ec::{EcGroup, EcKey, EcKeyRef, PointConversionForm};
use openssl::nid::Nid;
use openssl::pkey::Private;
use pkcs8::AlgorithmIdentifierRef;
use std::fmt;
use zeroize::Zeroizing;

/// The short name of ECDSA returned by [`Key::keyname()`](../trait.Key.html#method.keyname)
pub const ECDSA_NAME: &str = "ECDSA";

/// An enum of the supported elliptic curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcCurve {
    Nistp256,
    Nistp384,
    Nistp521,
}

impl EcCurve {
    pub(crate) fn from_nid(nid: Nid) -> KeyprintResult<Self> {
        match nid {
            Nid::X9_62_PRIME256V1 => Ok(EcCurve::Nistp256),
            Nid::SECP384R1 => Ok(EcCurve::Nistp384),
            Nid::SECP521R1 => Ok(EcCurve::Nistp521),
            _ => Err(ErrorKind::UnsupportedCurve.into()),
        }
    }

    /// The key size of this curve
    pub fn size(self) -> usize {
        match self {
            EcCurve::Nistp256 => 256,
            EcCurve::Nistp384 => 384,
            EcCurve::Nistp521 => 521,
        }
    }

    /// The length of the encoded private scalar in bytes
    pub fn scalar_len(self) -> usize {
        (self.size() + 7) / 8
    }

    fn nid(self) -> Nid {
        match self {
            EcCurve::Nistp256 => Nid::X9_62_PRIME256V1,
            EcCurve::Nistp384 => Nid::SECP384R1,
            EcCurve::Nistp521 => Nid::SECP521R1,
        }
    }

    fn group(self) -> Result<EcGroup, openssl::error::ErrorStack> {
        EcGroup::from_curve_name(self.nid())
    }
}

/// Represent the ECDSA private key material
pub struct EcDsaKeyMaterial {
    key: EcKey<Private>,
    curve: EcCurve,
}

impl EcDsaKeyMaterial {
    /// Take over an OpenSSL key
    ///
    /// The key is rebuilt on a named curve group with uncompressed point conversion,
    /// so explicit parameters or compressed points in the source don't leak into the encoding.
    pub(crate) fn from_ossl_ec(key: EcKey<Private>) -> KeyprintResult<Self> {
        let curve = EcCurve::from_nid(key.group().curve_name().unwrap_or(Nid::UNDEF))?;
        let group = curve
            .group()
            .map_err(|e| Error::with_error(ErrorKind::MalformedKeyEncoding, e))?;
        let key = EcKey::from_private_components(&group, key.private_key(), key.public_key())
            .map_err(|e| Error::with_error(ErrorKind::MalformedKeyEncoding, e))?;

        Ok(Self { key, curve })
    }

    pub(crate) fn ossl_ec(&self) -> &EcKeyRef<Private> {
        &self.key
    }

    /// Get the key's elliptic curve type
    pub fn curve(&self) -> EcCurve {
        self.curve
    }

    /// The private scalar in big endian, left padded to the curve's scalar length
    pub fn private_scalar(&self) -> KeyprintResult<Zeroizing<Vec<u8>>> {
        let raw = Zeroizing::new(self.key.private_key().to_vec());
        let len = self.curve.scalar_len();
        if raw.len() > len {
            return Err(ErrorKind::MalformedKeyEncoding.into());
        }
        let mut scalar = Zeroizing::new(vec![0u8; len]);
        scalar[len - raw.len()..].copy_from_slice(&raw);
        Ok(scalar)
    }

    /// The public point in uncompressed form (`04 || X || Y`)
    pub fn public_point(&self) -> KeyprintResult<Vec<u8>> {
        let mut bn_ctx = BigNumContext::new()
            .map_err(|e| Error::with_error(ErrorKind::DerEncodingFailure, e))?;
        self.key
            .public_key()
            .to_bytes(
                self.key.group(),
                PointConversionForm::UNCOMPRESSED,
                &mut bn_ctx,
            )
            .map_err(|e| Error::with_error(ErrorKind::DerEncodingFailure, e))
    }
}

impl Key for EcDsaKeyMaterial {
    fn size(&self) -> usize {
        self.curve.size()
    }

    fn keyname(&self) -> &'static str {
        ECDSA_NAME
    }
}

impl PrivateParts for EcDsaKeyMaterial {
    fn algorithm(&self) -> AlgorithmIdentifierRef<'static> {
        EC_ALGORITHM
    }

    fn private_key_der(&self) -> KeyprintResult<Zeroizing<Vec<u8>>> {
        encode_sec1(self)
    }
}

impl fmt::Debug for EcDsaKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EcDsaKeyMaterial")
            .field("curve", &self.curve)
            .finish()
    }
}

impl PartialEq for EcDsaKeyMaterial {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.key.private_key() == other.key.private_key()
    }
}

//! Derive a stable identity fingerprint from a PEM private key
//!
//! The key is re-encoded into a canonical PKCS#8 `PrivateKeyInfo` before hashing,
//! so the same key gives the same fingerprint whether it is stored as
//! `RSA PRIVATE KEY`, `EC PRIVATE KEY` or `PRIVATE KEY`.
//!
//! ```no_run
//! let pem = std::fs::read("id.pem")?;
//! let fingerprint = keyprint::fingerprint(&pem)?;
//! println!("identity={}", fingerprint);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod fingerprint;
pub mod keys;
pub(crate) mod format;

pub use crate::error::{Error, ErrorKind, KeyprintResult};
pub use crate::fingerprint::{Fingerprint, FingerprintHash};
pub use crate::format::pkcs8::{
    Pkcs8Document, EC_ALGORITHM, EC_PUBLIC_KEY_OID, RSA_ALGORITHM, RSA_ENCRYPTION_OID,
};
pub use crate::keys::{Key, KeyMaterial, KeyType, PrivateParts};

/// Decode the PEM private key and compute its SHA-1 fingerprint
pub fn fingerprint(pem: &[u8]) -> KeyprintResult<Fingerprint> {
    KeyMaterial::from_pem(pem)?.fingerprint()
}

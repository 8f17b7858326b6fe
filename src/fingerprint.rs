use crate::error::*;
use digest::Digest;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use std::fmt;
use std::str::FromStr;

/// An enum representing the hash function used to generate fingerprint
///
/// Used with [`KeyMaterial::fingerprint_with()`](../keys/enum.KeyMaterial.html#method.fingerprint_with).
///
/// # Hash Algorithm
/// SHA1: The identity token sent to the server. This is the default.
///
/// SHA2-256, SHA2-512: Longer digests over the same canonical PKCS#8 data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerprintHash {
    SHA1,
    SHA256,
    SHA512,
}

impl FingerprintHash {
    pub(crate) fn hash(self, data: &[u8]) -> Vec<u8> {
        fn digest_hash<D: Digest>(hasher: &mut D, data: &[u8]) -> Vec<u8> {
            hasher.update(data);
            hasher.finalize_reset().to_vec()
        }
        match self {
            FingerprintHash::SHA1 => digest_hash(&mut Sha1::default(), data),
            FingerprintHash::SHA256 => digest_hash(&mut Sha256::default(), data),
            FingerprintHash::SHA512 => digest_hash(&mut Sha512::default(), data),
        }
    }

    /// The length of the digest in bytes
    pub fn digest_len(self) -> usize {
        match self {
            FingerprintHash::SHA1 => 20,
            FingerprintHash::SHA256 => 32,
            FingerprintHash::SHA512 => 64,
        }
    }

    fn from_digest_len(len: usize) -> Option<Self> {
        match len {
            20 => Some(FingerprintHash::SHA1),
            32 => Some(FingerprintHash::SHA256),
            64 => Some(FingerprintHash::SHA512),
            _ => None,
        }
    }
}

impl Default for FingerprintHash {
    fn default() -> Self {
        FingerprintHash::SHA1
    }
}

/// The fingerprint of a private key
///
/// It is rendered as lowercase hex octets joined by `:`,
/// e.g. `07:16:47:40:...:3e` for a SHA-1 fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    hash: FingerprintHash,
    digest: Vec<u8>,
}

impl Fingerprint {
    /// Digest the data with the given hash function
    pub fn digest(hash: FingerprintHash, data: &[u8]) -> Self {
        Fingerprint {
            hash,
            digest: hash.hash(data),
        }
    }

    /// The hash function which produced this fingerprint
    pub fn hash(&self) -> FingerprintHash {
        self.hash
    }

    /// The raw digest bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.digest
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let groups: Vec<String> = self.digest.chunks(1).map(hex::encode).collect();
        f.write_str(&groups.join(":"))
    }
}

impl FromStr for Fingerprint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digest = s
            .trim()
            .split(':')
            .map(|group| {
                if group.len() != 2 {
                    return Err(Error::from_kind(ErrorKind::InvalidFingerprint));
                }
                let byte = hex::decode(group)
                    .map_err(|e| Error::with_error(ErrorKind::InvalidFingerprint, e))?;
                Ok(byte[0])
            })
            .collect::<KeyprintResult<Vec<u8>>>()?;
        let hash = FingerprintHash::from_digest_len(digest.len())
            .ok_or_else(|| Error::from_kind(ErrorKind::InvalidFingerprint))?;
        Ok(Fingerprint { hash, digest })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn sha1_empty_input() {
        let fp = Fingerprint::digest(FingerprintHash::SHA1, b"");
        assert_eq!(fp.as_bytes(), hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709"));
        assert_eq!(
            fp.to_string(),
            "da:39:a3:ee:5e:6b:4b:0d:32:55:bf:ef:95:60:18:90:af:d8:07:09"
        );
    }

    #[test]
    fn digest_len_matches() {
        for hash in &[
            FingerprintHash::SHA1,
            FingerprintHash::SHA256,
            FingerprintHash::SHA512,
        ] {
            let fp = Fingerprint::digest(*hash, b"keyprint");
            assert_eq!(fp.as_bytes().len(), hash.digest_len());
            assert_eq!(fp.to_string().len(), hash.digest_len() * 3 - 1);
        }
    }

    #[test]
    fn parse_back() {
        let fp = Fingerprint::digest(FingerprintHash::SHA256, b"keyprint");
        let parsed: Fingerprint = fp.to_string().parse().unwrap();
        assert_eq!(parsed, fp);
        assert_eq!(parsed.hash(), FingerprintHash::SHA256);
    }

    #[test]
    fn parse_uppercase() {
        let parsed: Fingerprint = "DA:39:A3:EE:5E:6B:4B:0D:32:55:BF:EF:95:60:18:90:AF:D8:07:09"
            .parse()
            .unwrap();
        assert_eq!(parsed, Fingerprint::digest(FingerprintHash::SHA1, b""));
    }

    #[test]
    fn parse_invalid() {
        for s in &[
            "",
            "da:39",
            "da39:a3",
            "zz:39:a3:ee:5e:6b:4b:0d:32:55:bf:ef:95:60:18:90:af:d8:07:09",
            "da:39:a3:ee:5e:6b:4b:0d:32:55:bf:ef:95:60:18:90:af:d8:07:",
        ] {
            let err = s.parse::<Fingerprint>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFingerprint);
        }
    }
}

use crate::error::*;
use crate::keys::KeyMaterial;

pub(crate) mod pem;
pub(crate) mod pkcs1;
pub(crate) mod pkcs8;
pub(crate) mod sec1;

pub fn parse_keystr(pem: &[u8]) -> KeyprintResult<KeyMaterial> {
    let block = pem::decode_first_block(pem)?;
    log::debug!("Decoding PEM block \"{}\"", block.label());

    match block.label() {
        "RSA PRIVATE KEY" => {
            // PKCS#1
            Ok(pkcs1::decode_pkcs1(block.data())?.into())
        }
        "EC PRIVATE KEY" => {
            // SEC1
            Ok(sec1::decode_sec1(block.data())?.into())
        }
        "PRIVATE KEY" => {
            // PKCS#8 format
            pkcs8::decode_pkcs8(block.data())
        }
        _ => Err(ErrorKind::UnsupportedKeyType.into()),
    }
}

#![allow(dead_code)]

use keyprint::{Fingerprint, KeyMaterial};
use std::fs;
use std::path::{Path, PathBuf};

pub fn locate_crate_files<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut abspath = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    abspath.push(path);
    abspath
}

pub fn read_keyfile<P: AsRef<Path>>(keyfile: P) -> Vec<u8> {
    fs::read(locate_crate_files(keyfile)).unwrap()
}

pub fn keyfile_fingerprint<P: AsRef<Path>>(keyfile: P) -> Fingerprint {
    let pem = read_keyfile(keyfile);
    KeyMaterial::from_pem(&pem).unwrap().fingerprint().unwrap()
}

/// Check the `xx:xx:...:xx` form of a SHA-1 fingerprint
#[inline]
pub fn assert_sha1_format(fingerprint: &str) {
    assert_eq!(fingerprint.len(), 59);
    let groups: Vec<&str> = fingerprint.split(':').collect();
    assert_eq!(groups.len(), 20);
    for group in groups {
        assert_eq!(group.len(), 2);
        assert!(group
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

/// Wrap DER data into a PEM block with 64 columns lines
pub fn pem_wrap(label: &str, der: &[u8]) -> String {
    let body = base64::encode(der);
    let mut pem = format!("-----BEGIN {}-----\n", label);
    for line in body.as_bytes().chunks(64) {
        pem.push_str(std::str::from_utf8(line).unwrap());
        pem.push('\n');
    }
    pem.push_str(&format!("-----END {}-----\n", label));
    pem
}

/// Extract the DER data from a PEM file with a single block
pub fn pem_unwrap(pem: &[u8]) -> Vec<u8> {
    let body: String = std::str::from_utf8(pem)
        .unwrap()
        .lines()
        .filter(|l| !l.starts_with("-----"))
        .collect();
    base64::decode(&body).unwrap()
}

use crate::error::*;
use zeroize::Zeroizing;

const PEM_BEGIN: &[u8] = b"-----BEGIN ";
const PEM_END: &[u8] = b"-----END ";
const PEM_DASHES: &[u8] = b"-----";

/// A decoded PEM block
pub struct PemBlock {
    label: String,
    data: Zeroizing<Vec<u8>>,
}

impl PemBlock {
    /// The label after `BEGIN`, e.g. `RSA PRIVATE KEY`
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The base64 decoded content
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Decode the first PEM block in the input
///
/// Anything before the first `-----BEGIN ` marker is skipped.
/// A malformed block, or one whose END label differs from its BEGIN label,
/// is skipped as well and the search goes on after its BEGIN marker.
pub fn decode_first_block(pem: &[u8]) -> KeyprintResult<PemBlock> {
    let mut offset = 0;
    while let Some(pos) = find(&pem[offset..], PEM_BEGIN) {
        let start = offset + pos;
        if let Some(block) = decode_block_at(&pem[start..]) {
            return Ok(block);
        }
        log::debug!("Skipping malformed PEM block at offset {}", start);
        offset = start + PEM_BEGIN.len();
    }
    Err(ErrorKind::NoPemBlockFound.into())
}

fn decode_block_at(pem: &[u8]) -> Option<PemBlock> {
    // HACK: nom_pem fails on CRLF and on a missing final newline
    let mut normalized: Zeroizing<Vec<u8>> =
        Zeroizing::new(pem.iter().copied().filter(|&b| b != b'\r').collect());
    if normalized.last() != Some(&b'\n') {
        normalized.push(b'\n');
    }

    let block = nom_pem::decode_block(&normalized).ok()?;
    // nom_pem doesn't check the END label
    if end_label(&normalized)? != block.block_type.as_bytes() {
        return None;
    }

    Some(PemBlock {
        label: block.block_type.to_owned(),
        data: Zeroizing::new(block.data),
    })
}

fn end_label(pem: &[u8]) -> Option<&[u8]> {
    let start = find(pem, PEM_END)? + PEM_END.len();
    let len = find(&pem[start..], PEM_DASHES)?;
    Some(&pem[start..start + len])
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod test {
    use super::*;

    const HELLO_PEM: &str = "-----BEGIN GREETING-----\naGVsbG8=\n-----END GREETING-----\n";

    #[test]
    fn decode_simple_block() {
        let block = decode_first_block(HELLO_PEM.as_bytes()).unwrap();
        assert_eq!(block.label(), "GREETING");
        assert_eq!(block.data(), b"hello");
    }

    #[test]
    fn skip_leading_text() {
        let input = format!("Some comment\nabout the key\n{}", HELLO_PEM);
        let block = decode_first_block(input.as_bytes()).unwrap();
        assert_eq!(block.label(), "GREETING");
        assert_eq!(block.data(), b"hello");
    }

    #[test]
    fn crlf_line_endings() {
        let input = HELLO_PEM.replace('\n', "\r\n");
        let block = decode_first_block(input.as_bytes()).unwrap();
        assert_eq!(block.data(), b"hello");
    }

    #[test]
    fn missing_final_newline() {
        let block = decode_first_block(HELLO_PEM.trim_end().as_bytes()).unwrap();
        assert_eq!(block.data(), b"hello");
    }

    #[test]
    fn no_block() {
        let inputs: [&[u8]; 4] = [
            b"",
            b"hello",
            b"-----END GREETING-----\n",
            b"\x00\xff\xfe",
        ];
        for input in inputs.iter() {
            let err = decode_first_block(input).err().unwrap();
            assert_eq!(err.kind(), ErrorKind::NoPemBlockFound);
        }
    }

    #[test]
    fn unterminated_block() {
        let err = decode_first_block(b"-----BEGIN GREETING-----\naGVsbG8=\n")
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::NoPemBlockFound);
    }

    #[test]
    fn mismatched_end_label() {
        let input = "-----BEGIN GREETING-----\naGVsbG8=\n-----END FAREWELL-----\n";
        let err = decode_first_block(input.as_bytes()).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::NoPemBlockFound);
    }

    #[test]
    fn skip_malformed_block() {
        let input = format!("-----BEGIN junk\n{}", HELLO_PEM);
        let block = decode_first_block(input.as_bytes()).unwrap();
        assert_eq!(block.label(), "GREETING");
        assert_eq!(block.data(), b"hello");

        let input = format!(
            "-----BEGIN GREETING-----\naGVsbG8=\n-----END FAREWELL-----\n{}",
            HELLO_PEM.replace("GREETING", "WELCOME")
        );
        let block = decode_first_block(input.as_bytes()).unwrap();
        assert_eq!(block.label(), "WELCOME");
    }
}

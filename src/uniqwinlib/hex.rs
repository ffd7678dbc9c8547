use std::fmt;

use itertools::Itertools;

/// Displays a byte slice as lowercase two-digit hex values separated by
/// single spaces.
#[derive(Debug, Clone, Copy)]
pub struct HexBytes<'a>(pub &'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .format_with(" ", |byte, f| f(&format_args!("{:02x}", byte)))
        )
    }
}

/// Parse hex-dump text into bytes. Each line holds either whitespace-separated
/// byte tokens or one packed run of concatenated hex digit pairs; a line is
/// treated as packed when its first token is longer than two characters.
pub fn parse_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    let mut data = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let first = match tokens.next() {
            Some(first) => first,
            None => continue,
        };
        if first.len() > 2 {
            // Packed form: only the first token on the line carries data.
            let dropped = tokens.count();
            if dropped > 0 {
                log::warn!(
                    "line {}: ignoring {} trailing tokens after packed run",
                    i + 1,
                    dropped
                );
            }
            let run = parse_packed_run(first)
                .map_err(|e| anyhow::anyhow!("error parsing line {}: {}", i + 1, e))?;
            data.extend(run);
        } else {
            for token in line.split_whitespace() {
                let byte = u8::from_str_radix(token, 16).map_err(|e| {
                    anyhow::anyhow!("error parsing line {}: bad byte {:?}: {}", i + 1, token, e)
                })?;
                data.push(byte);
            }
        }
    }
    Ok(data)
}

fn parse_packed_run(run: &str) -> anyhow::Result<Vec<u8>> {
    if run.len() % 2 != 0 {
        anyhow::bail!("packed hex run has odd length {}", run.len());
    }
    let mut bytes = Vec::with_capacity(run.len() / 2);
    for index in (0..run.len()).step_by(2) {
        let pair = run
            .get(index..index + 2)
            .ok_or_else(|| anyhow::anyhow!("bad hex pair at offset {}", index))?;
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|e| anyhow::anyhow!("bad hex pair {:?}: {}", pair, e))?;
        bytes.push(byte);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::{parse_hex, HexBytes};

    #[test]
    fn test_parse_spaced_tokens() {
        let data = parse_hex("11 22 33\n44 55\n").unwrap();
        assert_eq!(data, vec![0x11, 0x22, 0x33, 0x44, 0x55]);
    }

    #[test]
    fn test_parse_one_digit_tokens() {
        let data = parse_hex("a 5 0f\n").unwrap();
        assert_eq!(data, vec![0x0a, 0x05, 0x0f]);
    }

    #[test]
    fn test_parse_packed_runs() {
        let data = parse_hex("112233\naabb\n").unwrap();
        assert_eq!(data, vec![0x11, 0x22, 0x33, 0xaa, 0xbb]);
    }

    #[test]
    fn test_parse_mixed_forms() {
        let data = parse_hex("de ad\nbeef11\n22 33\n").unwrap();
        assert_eq!(data, vec![0xde, 0xad, 0xbe, 0xef, 0x11, 0x22, 0x33]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let data = parse_hex("11\n\n  \n22\n").unwrap();
        assert_eq!(data, vec![0x11, 0x22]);
    }

    #[test]
    fn test_parse_packed_line_keeps_first_token_only() {
        let data = parse_hex("aabb cc dd\n").unwrap();
        assert_eq!(data, vec![0xaa, 0xbb]);
    }

    #[test]
    fn test_parse_odd_packed_run_fails_with_length() {
        let err = parse_hex("abc").unwrap_err();
        assert!(err.to_string().contains("odd length 3"), "{}", err);
    }

    #[test]
    fn test_parse_bad_digit_fails() {
        assert!(parse_hex("zz 11").is_err());
        assert!(parse_hex("11 2g").is_err());
        assert!(parse_hex("aabbzz11").is_err());
    }

    #[test]
    fn test_parse_rejects_oversized_token() {
        // A token after a two-digit first token stays in spaced form, so a
        // value that does not fit a byte is an error, not a large element.
        assert!(parse_hex("11 abcd").is_err());
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_hex_bytes_display() {
        assert_eq!(HexBytes(&[0x01, 0xab, 0xff]).to_string(), "01 ab ff");
        assert_eq!(HexBytes(&[0x00]).to_string(), "00");
        assert_eq!(HexBytes(&[]).to_string(), "");
    }

    #[test]
    fn test_parse_sample_file() {
        let data = parse_hex(include_str!("../../test_data.txt")).unwrap();
        assert_eq!(data.len(), 32);
        assert_eq!(data[0], 0xde);
        assert_eq!(data[16], 0x01);
        assert_eq!(data[31], 0x10);
    }
}

//! Debug utilities for printing octets as hex.

/// Formats a byte slice as a space-separated hex string.
///
/// At most `max` bytes are shown; the rest is summarized as a count.
///
/// # Example
///
/// ```
/// use shortlink_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x00, 0x00, 0x00, 0x09], 16), "00 00 00 09");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let mut result = octets
        .iter()
        .take(max)
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ");
    if octets.len() > max {
        result.push_str(&format!("... ({} more)", octets.len() - max));
    }
    result
}

/// Formats a byte slice as a hex string with a default max of 16 bytes.
pub fn print_octets_default(octets: &[u8]) -> String {
    print_octets(octets, 16)
}

/// Renders a classic 16-bytes-per-row dump: offset, hex columns, ASCII.
///
/// ```
/// use shortlink_buffers::hex_dump;
///
/// let dump = hex_dump(b"\x00\x00\x00\x02hi\xff\xff\xff\xff");
/// assert_eq!(
///     dump,
///     "00000000  00 00 00 02 68 69 ff ff ff ff                    |....hi....|\n"
/// );
/// ```
pub fn hex_dump(octets: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in octets.chunks(16).enumerate() {
        let hex = print_octets(chunk, 16);
        let ascii: String = chunk
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect();
        out.push_str(&format!("{:08x}  {hex:<47}  |{ascii}|\n", row * 16));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_octets_truncates() {
        let data: Vec<u8> = (0..20).collect();
        assert!(print_octets(&data, 10).ends_with("... (10 more)"));
    }

    #[test]
    fn hex_dump_rows() {
        let data: Vec<u8> = (0x41..0x41 + 17).collect();
        let dump = hex_dump(&data);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("00000000  41 42"));
        assert!(lines[0].ends_with("|ABCDEFGHIJKLMNOP|"));
        assert!(lines[1].starts_with("00000010  51"));
    }

    #[test]
    fn hex_dump_empty() {
        assert_eq!(hex_dump(&[]), "");
    }
}

//! Writer output and octet formatting matrix.

use shortlink_buffers::{hex_dump, print_octets, print_octets_default, Writer};

#[test]
fn u32_matrix() {
    let cases: [(u32, [u8; 4]); 4] = [
        (0, [0, 0, 0, 0]),
        (9, [0, 0, 0, 9]),
        (0x0102_0304, [1, 2, 3, 4]),
        (u32::MAX, [0xff, 0xff, 0xff, 0xff]),
    ];
    let mut w = Writer::new();
    for (value, expected) in cases {
        w.u32(value);
        assert_eq!(w.flush(), expected.to_vec(), "{value:#x}");
    }
}

#[test]
fn mixed_writes_concatenate() {
    let mut w = Writer::with_capacity(1);
    w.u8(0xAA);
    w.buf(&[1, 2]);
    w.utf8("é");
    w.u32(1);
    assert_eq!(w.as_slice(), &[0xAA, 1, 2, 0xC3, 0xA9, 0, 0, 0, 1]);
    assert_eq!(w.len(), 9);
}

#[test]
fn octet_formatting() {
    assert_eq!(print_octets_default(&[0xff, 0xff, 0xff, 0xff]), "ff ff ff ff");
    assert_eq!(print_octets(&[1, 2, 3], 2), "01 02... (1 more)");
    assert_eq!(hex_dump(b"abc"), format!("00000000  {:<47}  |abc|\n", "61 62 63"));
}

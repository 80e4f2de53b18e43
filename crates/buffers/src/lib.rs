//! Binary buffer utilities for shortlink.
//!
//! # Overview
//!
//! - [`Writer`] - Writes big-endian integers and raw bytes to a growable buffer
//! - [`print_octets`] - Formats bytes as a hex string for logs and tools
//! - [`hex_dump`] - Multi-line offset/hex/ASCII dump of a buffer
//!
//! # Example
//!
//! ```
//! use shortlink_buffers::Writer;
//!
//! let mut writer = Writer::new();
//! writer.u32(5);
//! writer.utf8("hello");
//! let data = writer.flush();
//!
//! assert_eq!(&data[..4], &[0, 0, 0, 5]);
//! assert_eq!(&data[4..], b"hello");
//! ```

mod print_octets;
mod writer;

pub use print_octets::{hex_dump, print_octets, print_octets_default};
pub use writer::Writer;

//! Record encoder.

use shortlink_buffers::Writer;

use crate::{EncodeError, Member, StoredValue, ABSENT_LENGTH, LENGTH_PREFIX_SIZE};

/// Reusable record encoder.
///
/// Each field is written as a big-endian `u32` length followed by its UTF-8
/// bytes. An absent secret is written as the absent marker length alone.
pub struct RecordEncoder {
    pub writer: Writer,
}

impl Default for RecordEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes `value` and returns the record bytes.
    ///
    /// Nothing is left in the writer when an error is returned.
    pub fn encode(&mut self, value: &StoredValue) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        self.writer.ensure_capacity(encoded_len(value));
        if let Err(err) = self.write_value(value) {
            self.writer.reset();
            return Err(err);
        }
        Ok(self.writer.flush())
    }

    pub fn write_value(&mut self, value: &StoredValue) -> Result<(), EncodeError> {
        // Validate both fields before writing so a failure leaves no partial record.
        let url_len = checked_len(Member::Url, value.url.len())?;
        let secret_len = match &value.secret {
            Some(secret) => Some(checked_len(Member::Password, secret.len())?),
            None => None,
        };

        self.write_field(url_len, &value.url);
        match (secret_len, &value.secret) {
            (Some(len), Some(secret)) => self.write_field(len, secret),
            _ => self.write_absent(),
        }
        Ok(())
    }

    /// Writes one length-prefixed field.
    pub fn write_field(&mut self, len: u32, data: &str) {
        self.writer.u32(len);
        self.writer.utf8(data);
    }

    /// Writes the marker for an absent optional field.
    pub fn write_absent(&mut self) {
        self.writer.u32(ABSENT_LENGTH);
    }
}

fn checked_len(member: Member, len: usize) -> Result<u32, EncodeError> {
    match u32::try_from(len) {
        Ok(n) if n != ABSENT_LENGTH => Ok(n),
        _ => Err(EncodeError::ValueTooLarge { member, len }),
    }
}

/// Encodes `value` into a fresh buffer.
pub fn encode(value: &StoredValue) -> Result<Vec<u8>, EncodeError> {
    RecordEncoder::new().encode(value)
}

/// Exact size in bytes of the record for `value`.
pub fn encoded_len(value: &StoredValue) -> usize {
    LENGTH_PREFIX_SIZE
        + value.url.len()
        + LENGTH_PREFIX_SIZE
        + value.secret.as_ref().map_or(0, String::len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_len_rejects_marker_and_overflow() {
        assert_eq!(checked_len(Member::Url, 0), Ok(0));
        assert_eq!(checked_len(Member::Url, 0xFFFF_FFFE), Ok(0xFFFF_FFFE));
        assert_eq!(
            checked_len(Member::Password, 0xFFFF_FFFF),
            Err(EncodeError::ValueTooLarge {
                member: Member::Password,
                len: 0xFFFF_FFFF
            })
        );
        #[cfg(target_pointer_width = "64")]
        assert!(checked_len(Member::Url, 1 << 32).is_err());
    }

    #[test]
    fn encoder_is_reusable() {
        let mut encoder = RecordEncoder::new();
        let a = encoder.encode(&StoredValue::new("a")).unwrap();
        let b = encoder.encode(&StoredValue::with_secret("b", "c")).unwrap();
        assert_eq!(a, vec![0, 0, 0, 1, b'a', 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(b, vec![0, 0, 0, 1, b'b', 0, 0, 0, 1, b'c']);
    }

    #[test]
    fn encoded_len_matches_output() {
        let value = StoredValue::with_secret("https://example.com", "hunter2");
        assert_eq!(encode(&value).unwrap().len(), encoded_len(&value));
        let value = StoredValue::new("");
        assert_eq!(encode(&value).unwrap().len(), encoded_len(&value));
    }
}

//! Single-pass record decoder.
//!
//! Decoding is an explicit state machine: [`DecodeState`] holds the member
//! being read, the field within it, and the bytes collected so far, and
//! [`DecodeState::step`] moves it forward by exactly one input byte.
//! [`RecordDecoder`] drives that machine over arbitrarily chunked input.

use std::mem;

use crate::{DecodeError, Member, StoredValue, ABSENT_LENGTH, LENGTH_PREFIX_SIZE};

/// Which part of the current member is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Collecting the 4-byte big-endian length.
    LengthPrefix,
    /// Collecting `remaining` more data bytes.
    Data,
}

/// Decoder state between two input bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeState {
    member: Member,
    field: Field,
    prefix: [u8; LENGTH_PREFIX_SIZE],
    prefix_len: usize,
    remaining: u32,
    buffer: Vec<u8>,
    url: String,
    secret: Option<String>,
}

impl Default for DecodeState {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeState {
    /// State before the first byte of a record.
    pub fn new() -> Self {
        Self {
            member: Member::Url,
            field: Field::LengthPrefix,
            prefix: [0; LENGTH_PREFIX_SIZE],
            prefix_len: 0,
            remaining: 0,
            buffer: Vec::new(),
            url: String::new(),
            secret: None,
        }
    }

    pub fn member(&self) -> Member {
        self.member
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// Data bytes still expected for the current member.
    ///
    /// Only meaningful while [`DecodeState::field`] is [`Field::Data`].
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether a complete record has been read.
    pub fn is_done(&self) -> bool {
        self.member == Member::Done
    }

    /// Consumes one byte and returns the next state.
    pub fn step(mut self, byte: u8) -> Result<Self, DecodeError> {
        self.advance(byte)?;
        Ok(self)
    }

    /// Converts a finished state into the decoded value.
    pub fn into_value(self) -> Result<StoredValue, DecodeError> {
        if !self.is_done() {
            return Err(DecodeError::Truncated);
        }
        Ok(StoredValue {
            url: self.url,
            secret: self.secret,
        })
    }

    fn advance(&mut self, byte: u8) -> Result<(), DecodeError> {
        if self.member == Member::Done {
            return Err(DecodeError::TrailingData);
        }
        match self.field {
            Field::LengthPrefix => {
                self.prefix[self.prefix_len] = byte;
                self.prefix_len += 1;
                if self.prefix_len == LENGTH_PREFIX_SIZE {
                    self.prefix_len = 0;
                    self.begin_data(u32::from_be_bytes(self.prefix))?;
                }
            }
            Field::Data => {
                self.buffer.push(byte);
                self.remaining -= 1;
                if self.remaining == 0 {
                    self.end_member()?;
                }
            }
        }
        Ok(())
    }

    /// Feeds a whole slice, copying data runs in bulk.
    fn advance_slice(&mut self, mut input: &[u8]) -> Result<(), DecodeError> {
        while let Some((&first, rest)) = input.split_first() {
            if self.field == Field::Data && self.member != Member::Done {
                let take = input.len().min(self.remaining as usize);
                self.buffer.extend_from_slice(&input[..take]);
                self.remaining -= take as u32;
                input = &input[take..];
                if self.remaining == 0 {
                    self.end_member()?;
                }
            } else {
                self.advance(first)?;
                input = rest;
            }
        }
        Ok(())
    }

    fn begin_data(&mut self, declared: u32) -> Result<(), DecodeError> {
        // The absent marker only applies to the password. For the url it is
        // an ordinary length that no real input satisfies.
        if self.member == Member::Password && declared == ABSENT_LENGTH {
            self.secret = None;
            self.member = Member::Done;
            self.field = Field::LengthPrefix;
            return Ok(());
        }
        self.field = Field::Data;
        self.remaining = declared;
        if declared == 0 {
            self.end_member()?;
        }
        Ok(())
    }

    fn end_member(&mut self) -> Result<(), DecodeError> {
        let member = self.member;
        let text = String::from_utf8(mem::take(&mut self.buffer))
            .map_err(|_| DecodeError::InvalidUtf8 { member })?;
        match member {
            Member::Url => self.url = text,
            Member::Password => self.secret = Some(text),
            Member::Done => return Err(DecodeError::TrailingData),
        }
        self.member = member.next();
        self.field = Field::LengthPrefix;
        Ok(())
    }
}

/// Streaming record decoder accepting input in chunks.
///
/// Feeding a record in any number of chunks gives the same result as
/// decoding it in one call. The first error is sticky: later pushes return
/// it again without looking at their input.
///
/// # Example
///
/// ```
/// use shortlink_record::RecordDecoder;
///
/// let mut decoder = RecordDecoder::new();
/// decoder.push(&[0, 0, 0, 2, b'h']).unwrap();
/// decoder.push(&[b'i', 0xff, 0xff]).unwrap();
/// decoder.push(&[0xff, 0xff]).unwrap();
/// let value = decoder.finish().unwrap();
/// assert_eq!(value.url, "hi");
/// assert_eq!(value.secret, None);
/// ```
#[derive(Debug, Default)]
pub struct RecordDecoder {
    state: DecodeState,
    error: Option<DecodeError>,
}

impl RecordDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DecodeState {
        &self.state
    }

    pub fn is_done(&self) -> bool {
        self.error.is_none() && self.state.is_done()
    }

    /// Feeds the next chunk of input.
    pub fn push(&mut self, chunk: &[u8]) -> Result<(), DecodeError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.state.advance_slice(chunk).map_err(|err| {
            self.error = Some(err.clone());
            err
        })
    }

    /// Signals end of input and returns the decoded value.
    pub fn finish(self) -> Result<StoredValue, DecodeError> {
        match self.error {
            Some(err) => Err(err),
            None => self.state.into_value(),
        }
    }
}

/// Decodes exactly one record from `bytes`.
pub fn decode(bytes: &[u8]) -> Result<StoredValue, DecodeError> {
    let mut decoder = RecordDecoder::new();
    decoder.push(bytes)?;
    decoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(state: DecodeState, bytes: &[u8]) -> Result<DecodeState, DecodeError> {
        bytes.iter().try_fold(state, |state, &b| state.step(b))
    }

    #[test]
    fn prefix_bytes_accumulate_before_switching_to_data() {
        let state = feed(DecodeState::new(), &[0, 0, 0]).unwrap();
        assert_eq!(state.member(), Member::Url);
        assert_eq!(state.field(), Field::LengthPrefix);

        let state = state.step(3).unwrap();
        assert_eq!(state.field(), Field::Data);
        assert_eq!(state.remaining(), 3);
    }

    #[test]
    fn data_bytes_count_down_then_advance_member() {
        let state = feed(DecodeState::new(), &[0, 0, 0, 2, b'a']).unwrap();
        assert_eq!(state.remaining(), 1);
        assert_eq!(state.member(), Member::Url);

        let state = state.step(b'b').unwrap();
        assert_eq!(state.member(), Member::Password);
        assert_eq!(state.field(), Field::LengthPrefix);
    }

    #[test]
    fn zero_length_finalizes_without_data() {
        let state = feed(DecodeState::new(), &[0, 0, 0, 0]).unwrap();
        assert_eq!(state.member(), Member::Password);
        assert_eq!(state.field(), Field::LengthPrefix);

        let state = feed(state, &[0, 0, 0, 0]).unwrap();
        assert!(state.is_done());
        assert_eq!(state.into_value().unwrap(), StoredValue::with_secret("", ""));
    }

    #[test]
    fn absent_marker_on_password_completes_record() {
        let state = feed(DecodeState::new(), &[0, 0, 0, 0, 0xff, 0xff, 0xff]).unwrap();
        assert_eq!(state.member(), Member::Password);

        let state = state.step(0xff).unwrap();
        assert!(state.is_done());
        assert_eq!(state.into_value().unwrap().secret, None);
    }

    #[test]
    fn absent_marker_on_url_is_just_a_length() {
        let state = feed(DecodeState::new(), &[0xff, 0xff, 0xff, 0xff]).unwrap();
        assert_eq!(state.member(), Member::Url);
        assert_eq!(state.field(), Field::Data);
        assert_eq!(state.remaining(), u32::MAX);

        let state = feed(state, b"abc").unwrap();
        assert_eq!(state.remaining(), u32::MAX - 3);
        assert_eq!(state.into_value(), Err(DecodeError::Truncated));
    }

    #[test]
    fn byte_after_done_is_trailing_data() {
        let state = feed(DecodeState::new(), &[0, 0, 0, 0, 0xff, 0xff, 0xff, 0xff]).unwrap();
        assert_eq!(state.step(0), Err(DecodeError::TrailingData));
    }

    #[test]
    fn invalid_utf8_names_the_member() {
        let err = feed(DecodeState::new(), &[0, 0, 0, 1, 0xc3]).unwrap_err();
        assert_eq!(err, DecodeError::InvalidUtf8 { member: Member::Url });

        let err = feed(DecodeState::new(), &[0, 0, 0, 0, 0, 0, 0, 1, 0x80]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidUtf8 {
                member: Member::Password
            }
        );
    }

    #[test]
    fn bulk_feed_matches_stepping() {
        let bytes = [0, 0, 0, 3, b'a', b'b', b'c', 0, 0, 0, 2, b'x', b'y'];
        let stepped = feed(DecodeState::new(), &bytes).unwrap();
        let mut bulk = DecodeState::new();
        bulk.advance_slice(&bytes).unwrap();
        assert_eq!(stepped, bulk);
    }

    #[test]
    fn decoder_errors_are_sticky() {
        let mut decoder = RecordDecoder::new();
        assert_eq!(
            decoder.push(&[0, 0, 0, 0, 0xff, 0xff, 0xff, 0xff, 1]),
            Err(DecodeError::TrailingData)
        );
        assert!(!decoder.is_done());
        assert_eq!(decoder.push(&[]), Err(DecodeError::TrailingData));
        assert_eq!(decoder.finish(), Err(DecodeError::TrailingData));
    }

    #[test]
    fn empty_input_is_truncated() {
        assert_eq!(decode(&[]), Err(DecodeError::Truncated));
    }
}

//! Text - immutable UTF-8 string view
//!
//! A [`Text`] is a shared, immutable byte buffer plus a `[start, end)` window.
//! Byte-range views are zero-copy and may cut through a multi-byte code point;
//! decoding tolerates that by substituting U+FFFD.
//!
//! # Examples
//!
//! ```rust
//! use viewkit::Text;
//!
//! let s = Text::from("Hello 🌎");
//! assert_eq!(s.byte_len(), 10);
//!
//! let offsets: Vec<(usize, char)> = s.decode().collect();
//! assert_eq!(offsets.last(), Some(&(6, '🌎')));
//!
//! let fragment = s.byte_slice(4, 7).unwrap();
//! assert_eq!(fragment.to_code_points(), vec!['o', ' ', '\u{FFFD}']);
//! ```

use super::utf8::decode_first;
use crate::error::{check_range, Result};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::sync::Arc;

/// Immutable view over shared bytes, usually UTF-8
#[derive(Clone)]
pub struct Text {
    bytes: Arc<[u8]>,
    start: usize,
    end: usize,
}

impl Text {
    /// Create a text from a copy of `bytes`
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_shared(Arc::from(bytes))
    }

    fn from_shared(bytes: Arc<[u8]>) -> Self {
        let end = bytes.len();
        Self { bytes, start: 0, end }
    }

    /// Number of bytes in the view
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the view has no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow the viewed bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[self.start..self.end]
    }

    /// Sub-view over bytes `[lo, hi)` sharing the same buffer
    ///
    /// The bounds are byte offsets and are not checked against code point
    /// boundaries.
    pub fn byte_slice(&self, lo: usize, hi: usize) -> Result<Text> {
        check_range(lo, hi, self.byte_len())?;
        Ok(Text {
            bytes: Arc::clone(&self.bytes),
            start: self.start + lo,
            end: self.start + hi,
        })
    }

    /// Sub-view from byte `lo` to the end
    pub fn byte_slice_from(&self, lo: usize) -> Result<Text> {
        self.byte_slice(lo, self.byte_len())
    }

    /// Lazily decode the view into `(byte_offset, char)` pairs
    ///
    /// Each call starts again from the first byte.
    pub fn decode(&self) -> Decode<'_> {
        Decode {
            bytes: self.as_bytes(),
            pos: 0,
        }
    }

    /// Copy of the viewed bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// All code points, with U+FFFD for each malformed byte
    pub fn to_code_points(&self) -> Vec<char> {
        self.decode().map(|(_, c)| c).collect()
    }

    /// Number of code points `decode` yields
    pub fn char_count(&self) -> usize {
        self.decode().count()
    }

    /// Borrow as `&str` if the view is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Check if the view is valid UTF-8
    pub fn is_valid_utf8(&self) -> bool {
        self.as_str().is_some()
    }

    /// Decoded string with U+FFFD for each malformed byte
    pub fn to_string_lossy(&self) -> String {
        match self.as_str() {
            Some(s) => s.to_owned(),
            None => self.decode().map(|(_, c)| c).collect(),
        }
    }
}

/// Iterator over `(byte_offset, char)` returned by [`Text::decode`]
#[derive(Debug, Clone)]
pub struct Decode<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Decode<'a> {
    /// Byte offset of the next code point
    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        let offset = self.pos;
        let (c, width) = decode_first(&self.bytes[offset..]);
        self.pos += width.max(1);
        Some((offset, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() - self.pos;
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl<'a> FusedIterator for Decode<'a> {}

impl Default for Text {
    fn default() -> Self {
        Self::from_shared(Arc::from(Vec::new()))
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::from(s.into_bytes())
    }
}

impl From<Vec<u8>> for Text {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_shared(Arc::from(bytes))
    }
}

impl From<&[u8]> for Text {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Text {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Text {}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<String> for Text {
    fn eq(&self, other: &String) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Text {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => write!(f, "Text({:?})", s),
            None => write!(f, "Text({:?})", self.as_bytes()),
        }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => f.write_str(s),
            None => {
                for (_, c) in self.decode() {
                    write!(f, "{}", c)?;
                }
                Ok(())
            }
        }
    }
}

//! Key-tagged dictionaries
//!
//! A dictionary is an ordered list of tuples. Each tuple carries an integer
//! key and a typed value. Order is the order the sender wrote the tuples in,
//! which is also the order the receiver iterates them.

use heapless::{String, Vec};

/// Maximum tuples per dictionary
pub const MAX_TUPLES: usize = 8;

/// Maximum length of a string value in bytes
pub const MAX_CSTRING_LEN: usize = 64;

/// Maximum length of a byte-array value
pub const MAX_BYTES_LEN: usize = 64;

/// Errors that can occur while building a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictError {
    /// No room for another tuple
    Full,
    /// String value exceeds `MAX_CSTRING_LEN`
    StringTooLong,
    /// String value contains non-ASCII characters
    NotAscii,
    /// Byte-array value exceeds `MAX_BYTES_LEN`
    BytesTooLong,
}

/// Typed tuple value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleValue {
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    /// ASCII text
    CString(String<MAX_CSTRING_LEN>),
    /// Opaque bytes
    Bytes(Vec<u8, MAX_BYTES_LEN>),
}

impl TupleValue {
    /// Read the value as a signed 32-bit integer
    ///
    /// Narrower integer types are widened. A `UInt32` above `i32::MAX`,
    /// strings and byte arrays yield `None`.
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            TupleValue::UInt8(v) => Some(v as i32),
            TupleValue::UInt16(v) => Some(v as i32),
            TupleValue::UInt32(v) => i32::try_from(v).ok(),
            TupleValue::Int8(v) => Some(v as i32),
            TupleValue::Int16(v) => Some(v as i32),
            TupleValue::Int32(v) => Some(v),
            TupleValue::CString(_) | TupleValue::Bytes(_) => None,
        }
    }

    /// Read the value as text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TupleValue::CString(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Short type name for log messages
    pub fn type_name(&self) -> &'static str {
        match self {
            TupleValue::UInt8(_) => "u8",
            TupleValue::UInt16(_) => "u16",
            TupleValue::UInt32(_) => "u32",
            TupleValue::Int8(_) => "i8",
            TupleValue::Int16(_) => "i16",
            TupleValue::Int32(_) => "i32",
            TupleValue::CString(_) => "cstring",
            TupleValue::Bytes(_) => "bytes",
        }
    }
}

/// A single key-tagged field
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple {
    pub key: u32,
    pub value: TupleValue,
}

/// Ordered set of tuples
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dictionary {
    tuples: Vec<Tuple, MAX_TUPLES>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub const fn new() -> Self {
        Self { tuples: Vec::new() }
    }

    /// Append a tuple
    pub fn push(&mut self, tuple: Tuple) -> Result<(), DictError> {
        self.tuples.push(tuple).map_err(|_| DictError::Full)
    }

    /// Append an unsigned byte
    pub fn write_u8(&mut self, key: u32, value: u8) -> Result<(), DictError> {
        self.push(Tuple {
            key,
            value: TupleValue::UInt8(value),
        })
    }

    /// Append a signed 32-bit integer
    pub fn write_i32(&mut self, key: u32, value: i32) -> Result<(), DictError> {
        self.push(Tuple {
            key,
            value: TupleValue::Int32(value),
        })
    }

    /// Append an ASCII string
    pub fn write_cstring(&mut self, key: u32, value: &str) -> Result<(), DictError> {
        if !value.is_ascii() {
            return Err(DictError::NotAscii);
        }
        let mut s = String::new();
        s.push_str(value).map_err(|_| DictError::StringTooLong)?;
        self.push(Tuple {
            key,
            value: TupleValue::CString(s),
        })
    }

    /// Append raw bytes
    pub fn write_bytes(&mut self, key: u32, value: &[u8]) -> Result<(), DictError> {
        let bytes = Vec::from_slice(value).map_err(|_| DictError::BytesTooLong)?;
        self.push(Tuple {
            key,
            value: TupleValue::Bytes(bytes),
        })
    }

    /// First tuple with the given key
    pub fn get(&self, key: u32) -> Option<&TupleValue> {
        self.tuples.iter().find(|t| t.key == key).map(|t| &t.value)
    }

    /// Iterate tuples in delivery order
    pub fn iter(&self) -> core::slice::Iter<'_, Tuple> {
        self.tuples.iter()
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Tuple;
    type IntoIter = core::slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

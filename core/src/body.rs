use crate::{Error, Result};
use bytes::Bytes;
use std::fmt::{Debug, Formatter};
use std::io::{Cursor, Read};
use std::mem;

/// Body of a request that is going to be signed.
///
/// Signing schemes that cover the payload need to read the whole body before the
/// transport does. [`Body::buffer`] drains a reader body exactly once and leaves an
/// equivalent in-memory body in its place, so the transport can still read it.
#[derive(Default)]
pub enum Body {
    /// No body, hashed as a zero-length payload.
    #[default]
    Empty,
    /// Body already held in memory.
    Bytes(Bytes),
    /// Body that has not been read yet.
    Reader(Box<dyn Read + Send + Sync>),
}

impl Body {
    /// Create a body from a reader.
    pub fn from_reader(r: impl Read + Send + Sync + 'static) -> Self {
        Body::Reader(Box::new(r))
    }

    /// Buffer the whole body in memory and return its content.
    ///
    /// After this call the body is replayable: a reader body is replaced by the bytes
    /// it produced. If reading fails, the bytes that were already consumed are put back
    /// in front of the remaining reader before the error is returned.
    pub fn buffer(&mut self) -> Result<Bytes> {
        let mut r = match mem::take(self) {
            Body::Empty => return Ok(Bytes::new()),
            Body::Bytes(bs) => {
                *self = Body::Bytes(bs.clone());
                return Ok(bs);
            }
            Body::Reader(r) => r,
        };

        let mut buf = Vec::new();
        match r.read_to_end(&mut buf) {
            Ok(_) => {
                let bs = Bytes::from(buf);
                *self = Body::Bytes(bs.clone());
                Ok(bs)
            }
            Err(err) => {
                *self = Body::Reader(Box::new(Cursor::new(buf).chain(r)));
                Err(Error::body_unreadable("failed to read request body").with_source(err))
            }
        }
    }

    /// Consume the body and return its content.
    pub fn into_bytes(mut self) -> Result<Bytes> {
        self.buffer()
    }

    /// Check if the body is known to be empty without reading it.
    pub fn is_empty(&self) -> bool {
        match self {
            Body::Empty => true,
            Body::Bytes(bs) => bs.is_empty(),
            Body::Reader(_) => false,
        }
    }
}

impl Debug for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Empty => f.write_str("Empty"),
            Body::Bytes(bs) => f.debug_tuple("Bytes").field(&bs.len()).finish(),
            Body::Reader(_) => f.write_str("Reader"),
        }
    }
}

impl From<Bytes> for Body {
    fn from(bs: Bytes) -> Self {
        Body::Bytes(bs)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bs: Vec<u8>) -> Self {
        Body::Bytes(bs.into())
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Body::Bytes(s.into())
    }
}

impl From<&'static str> for Body {
    fn from(s: &'static str) -> Self {
        Body::Bytes(Bytes::from_static(s.as_bytes()))
    }
}

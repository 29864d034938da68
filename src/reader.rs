use std::{cmp::min, convert::Infallible, fmt::Debug, io::{ErrorKind, Read}};

/// A pull-based source of bytes.
///
/// Implementations fill as much of the provided buffer as they can and
/// return the filled prefix. An empty slice signals the end of input.
pub trait ReadBytes {
    type Error: Debug;

    fn next_n<'buf>(&mut self, buf: &'buf mut [u8]) -> Result<&'buf [u8], Self::Error>;
}

pub struct ByteSliceReader<'a> {
    slice: &'a [u8],
    index: usize,
}

impl<'a> ByteSliceReader<'a> {
    pub fn new(slice: &'a [u8]) -> ByteSliceReader<'a> {
        Self {
            slice,
            index: 0usize,
        }
    }
}

impl<'a> ReadBytes for ByteSliceReader<'a> {
    type Error = Infallible;

    fn next_n<'buf>(&mut self, buf: &'buf mut [u8]) -> Result<&'buf [u8], Self::Error> {
        if self.index >= self.slice.len() {
            return Ok(&[]);
        }
        let end = min(self.index + buf.len(), self.slice.len()) - self.index;
        buf[..end].copy_from_slice(&self.slice[self.index..self.index + end]);
        self.index += end;
        Ok(&buf[..end])
    }
}

pub struct IteratorByteReader<I: Iterator<Item = u8>> {
    iterator: I,
}

impl<I: Iterator<Item = u8>> IteratorByteReader<I> {
    pub fn new(iterator: I) -> Self {
        Self { iterator }
    }
}

impl<I: Iterator<Item = u8>> ReadBytes for IteratorByteReader<I> {
    type Error = Infallible;

    fn next_n<'buf>(&mut self, buf: &'buf mut [u8]) -> Result<&'buf [u8], Self::Error> {
        let mut i = 0usize;
        while i < buf.len() {
            match self.iterator.next() {
                Some(b) => {
                    buf[i] = b;
                }
                None => {
                    return Ok(&buf[..i]);
                }
            }
            i += 1;
        }
        Ok(&buf[..i])
    }
}

/// Reads from any [`std::io::Read`], retrying interrupted reads.
///
/// Short reads from the underlying source are topped up until the
/// buffer is full or the source reports end of file, so callers only
/// ever see an empty slice at the very end.
pub struct IoByteReader<R: Read> {
    inner: R,
}

impl<R: Read> IoByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> ReadBytes for IoByteReader<R> {
    type Error = std::io::Error;

    fn next_n<'buf>(&mut self, buf: &'buf mut [u8]) -> Result<&'buf [u8], Self::Error> {
        let mut filled = 0usize;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(&buf[..filled])
    }
}

//! # bin2hex
//! Converts raw binary data into a memory-initialization listing: one
//! two-digit lowercase hex byte per line, in input order. Hardware
//! simulators and memory loaders typically consume this layout directly.
//!
//! ## Examples
//!
//! Any slice of bytes [can be converted](AsRecords) in a single line:
//! ```rust
//! use bin2hex::AsRecords;
//!
//! let listing = [0x00u8, 0x41, 0xff, 0x0a].records().convert_to::<String>();
//! assert_eq!(listing, "00\n41\nff\n0a\n");
//! ```
//!
//! Any iterator that yields bytes can be consumed as well:
//! ```rust
//! use bin2hex::IntoRecords;
//!
//! let lines = (0x0eu8..0x12).into_records().convert_to::<Vec<String>>();
//! assert_eq!(lines, vec!["0e\n", "0f\n", "10\n", "11\n"]);
//! ```
//!
//! Whole files are handled by [`convert_file`], which reports the
//! [number of bytes](ConversionSummary) converted:
//! ```rust,no_run
//! let summary = bin2hex::convert_file("boot.bin", "boot.mem")?;
//! println!("{} lines written", summary.bytes);
//! # Ok::<(), bin2hex::ConvertError>(())
//! ```
//!
//! The listing can be read back with [`decode_records`]:
//! ```rust
//! use bin2hex::{decode_records, AsRecords};
//!
//! let data = b"\x7fELF";
//! let listing = data.records().convert_to::<String>();
//! assert_eq!(decode_records(&listing).unwrap(), data);
//! ```

use std::{convert::Infallible, fmt, io::Write};

use error::StreamError;
use reader::{ByteSliceReader, IteratorByteReader, ReadBytes};
use writer::{IOWriter, WriteRecords};

/// The [`ReadBytes`] trait and the byte sources it is implemented for.
pub mod reader;

/// The [`WriteRecords`] trait and several foreign type implementations.
pub mod writer;

/// Error types for conversion and decoding.
pub mod error;

mod convert;
mod decode;

pub use convert::{convert_file, ConversionSummary};
pub use decode::decode_records;
pub use error::{ConvertError, DecodeError};

const LOWER_LUT: [u8; 16] = [ b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'a', b'b', b'c', b'd', b'e', b'f' ];

/// Bytes pulled from the reader per refill.
const CHUNK_SIZE: usize = 4096;

trait ToHex {
    fn to_hex_lower(self) -> [u8; 2];
}

impl ToHex for u8 {
    fn to_hex_lower(self) -> [u8; 2] {
        let mut x = [0u8; 2];
        x[1] = LOWER_LUT[(self & 0xf) as usize];
        x[0] = LOWER_LUT[(self >> 4) as usize];
        x
    }
}

/// The text form of a single byte: two lowercase hex digits,
/// zero-padded, followed by a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexRecord([u8; 3]);

impl HexRecord {
    /// The two hex digits, without the line terminator.
    pub fn as_str(&self) -> &str {
        &self.as_line()[..2]
    }

    /// The two hex digits followed by `\n`.
    pub fn as_line(&self) -> &str {
        std::str::from_utf8(&self.0).expect("hex digits are ASCII")
    }
}

impl From<u8> for HexRecord {
    fn from(b: u8) -> Self {
        let [high, low] = b.to_hex_lower();
        HexRecord([high, low, b'\n'])
    }
}

impl fmt::Display for HexRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct RecordLineWriter<R: ReadBytes, W: WriteRecords> {
    reader: R,
    writer: W,
    written: usize,
}

impl<R: ReadBytes, W: WriteRecords> RecordLineWriter<R, W> {
    fn new(reader: R, writer: W) -> Self {
        Self { reader, writer, written: 0 }
    }

    fn run(mut self) -> Result<(W, usize), StreamError<R::Error, W::Error>> {
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            let bytes = self.reader.next_n(&mut chunk).map_err(StreamError::Read)?;
            if bytes.is_empty() {
                break;
            }
            for b in bytes {
                let record = HexRecord::from(*b);
                self.writer.write_str(record.as_line()).map_err(StreamError::Write)?;
                self.writer.line_end().map_err(StreamError::Write)?;
                self.written += 1;
            }
        }
        self.writer.finish().map_err(StreamError::Write)?;
        Ok((self.writer, self.written))
    }
}

/// Turns the bytes of a [`ReadBytes`] source into hex records.
///
/// Usually obtained through [`AsRecords`] or [`IntoRecords`] rather than
/// built by hand.
pub struct Converter<R: ReadBytes> {
    reader: R,
}

impl<R: ReadBytes> Converter<R> {
    pub fn new(reader: R) -> Self {
        Converter { reader }
    }

    /// Converts every byte into `writer`, returning the writer and
    /// the number of records written.
    ///
    /// Stops at the first read or write failure. Records already
    /// handed to the writer stay there.
    pub fn try_convert_into<W: WriteRecords>(self, writer: W) -> Result<(W, usize), StreamError<R::Error, W::Error>> {
        RecordLineWriter::new(self.reader, writer).run()
    }
}

impl<R: ReadBytes<Error = Infallible>> Converter<R> {
    /// Converts into a fresh `W` and returns its [`Output`](WriteRecords::Output).
    pub fn convert_to<W: WriteRecords + Default>(self) -> W::Output {
        self.convert_into(W::default())
    }

    pub fn convert_into<W: WriteRecords>(self, writer: W) -> W::Output {
        let r = self.try_convert_into(writer)
            .map(|(w, _)| w)
            .map_err(|e| match e {
                StreamError::Read(never) => match never {},
                StreamError::Write(e) => e,
            });
        W::consume(r)
    }

    /// Writes records to any [`std::io::Write`] through a buffer and
    /// returns how many were written.
    pub fn convert_io<W: Write>(self, write: W) -> Result<usize, std::io::Error> {
        match self.try_convert_into(IOWriter::new(write)) {
            Ok((_, written)) => Ok(written),
            Err(StreamError::Read(never)) => match never {},
            Err(StreamError::Write(e)) => Err(e),
        }
    }
}

/// Borrow a byte container as a record source.
pub trait AsRecords<'a> {
    fn as_records(&'a self) -> Converter<ByteSliceReader<'a>>;

    fn records(&'a self) -> Converter<ByteSliceReader<'a>> {
        self.as_records()
    }
}

impl<'a, T: AsRef<[u8]>> AsRecords<'a> for T {
    fn as_records(&'a self) -> Converter<ByteSliceReader<'a>> {
        Converter::new(ByteSliceReader::new(self.as_ref()))
    }
}

/// Consume a byte iterator as a record source.
pub trait IntoRecords: Sized {
    type Output: ReadBytes;
    fn into_records(self) -> Converter<Self::Output>;
}

impl<I: Iterator<Item = u8>> IntoRecords for I {
    type Output = IteratorByteReader<I>;
    fn into_records(self) -> Converter<Self::Output> {
        Converter::new(IteratorByteReader::new(self))
    }
}

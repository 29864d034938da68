use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

use tracing::{debug, info};

use crate::{
    error::{ConvertError, StreamError},
    reader::IoByteReader,
    writer::IOWriter,
    Converter,
};

/// What a successful [`convert_file`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Bytes read from the source, which is also the number of lines
    /// written to the destination.
    pub bytes: u64,
}

/// Writes one hex record per byte of `source` into `destination`.
///
/// The source is opened before the destination is created, so a
/// missing or unreadable source leaves the destination untouched.
/// The destination is created if needed and truncated otherwise.
/// Naming the source itself as destination is rejected as
/// [`ConvertError::DestinationUnwritable`] before anything is truncated.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<ConversionSummary, ConvertError> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    debug!(path = %source.display(), "opening source");
    let input = File::open(source)
        .map_err(|e| ConvertError::source_open(source.to_path_buf(), e))?;
    let metadata = input.metadata()
        .map_err(|e| ConvertError::source_open(source.to_path_buf(), e))?;
    if metadata.is_dir() {
        return Err(ConvertError::SourceUnreadable {
            path: source.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "is a directory"),
        });
    }

    if is_same_file(source, destination) {
        return Err(ConvertError::DestinationUnwritable {
            path: destination.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "destination is the source file"),
        });
    }

    debug!(path = %destination.display(), "creating destination");
    let output = File::create(destination)
        .map_err(|e| ConvertError::DestinationUnwritable { path: destination.to_path_buf(), source: e })?;

    let reader = IoByteReader::new(BufReader::new(input));
    let written = Converter::new(reader)
        .try_convert_into(IOWriter::new(output))
        .map(|(_, written)| written)
        .map_err(|e| match e {
            StreamError::Read(e) => ConvertError::SourceUnreadable { path: source.to_path_buf(), source: e },
            StreamError::Write(e) => ConvertError::DestinationUnwritable { path: destination.to_path_buf(), source: e },
        })?;

    info!(
        source = %source.display(),
        destination = %destination.display(),
        bytes = written,
        "conversion complete"
    );
    Ok(ConversionSummary { bytes: written as u64 })
}

/// True when both paths resolve to the same existing file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

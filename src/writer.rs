use std::{convert::Infallible, fmt::Debug, io::BufWriter};

pub trait WriteRecords: Sized {
    type Error: Debug;

    /// Type to return when the writer is consumed.
    ///
    /// This lets a sink hand back something other than itself,
    /// which is handy when implementing the trait over foreign types:
    ///
    /// ```no_run
    /// use bin2hex::{AsRecords, writer::WriteRecords};
    /// use std::convert::Infallible;
    ///
    /// #[derive(Default)]
    /// struct LineCounter(usize);
    ///
    /// impl WriteRecords for LineCounter {
    ///     type Error = Infallible;
    ///     type Output = usize;
    ///
    ///     fn write_str(&mut self, _: &str) -> Result<(), Self::Error> {
    ///         Ok(())
    ///     }
    ///
    ///     fn line_end(&mut self) -> Result<(), Self::Error> {
    ///         self.0 += 1;
    ///         Ok(())
    ///     }
    ///
    ///     fn consume(r: Result<Self, Self::Error>) -> Self::Output {
    ///        r.unwrap().0
    ///     }
    /// }
    ///
    /// let lines: usize = b"greetings!".records().convert_to::<LineCounter>();
    /// assert_eq!(lines, 10);
    /// ```
    type Output;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error>;

    /// Called after each record, including its trailing newline,
    /// has been written.
    fn line_end(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once after the last record. Buffered sinks flush here.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Consume the writer or any error encountered during
    /// writing and return the [`Output`](Self::Output) type.
    fn consume(r: Result<Self, Self::Error>) -> Self::Output;
}

/// Adapts a [`std::io::Write`] into a record sink.
pub struct IOWriter<W: std::io::Write>(pub W);

impl<W: std::io::Write> IOWriter<W> {
    pub fn new(w: W) -> IOWriter<BufWriter<W>> {
        IOWriter(BufWriter::new(w))
    }
}

impl<W: std::io::Write> WriteRecords for IOWriter<W> {
    type Error = std::io::Error;
    type Output = Result<(), std::io::Error>;
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.0.write_all(s.as_bytes())
    }
    fn finish(&mut self) -> Result<(), Self::Error> {
        self.0.flush()
    }
    fn consume(r: Result<Self, Self::Error>) -> Self::Output {
        r.and_then(|mut s| s.0.flush())
    }
}

impl WriteRecords for String {
    type Error = Infallible;
    type Output = String;
    fn consume(r: Result<Self, Self::Error>) -> Self::Output {
        r.unwrap()
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.push_str(s);
        Ok(())
    }
}

/// Collects one `String` per record, each keeping its trailing newline.
impl WriteRecords for Vec<String> {
    type Error = Infallible;
    type Output = Vec<String>;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        match self.last_mut() {
            Some(last) => last.push_str(s),
            None => self.push(s.to_owned()),
        }
        Ok(())
    }

    fn line_end(&mut self) -> Result<(), Self::Error> {
        self.push(String::with_capacity(3));
        Ok(())
    }

    fn consume(r: Result<Self, Self::Error>) -> Self::Output {
        let mut lines = r.unwrap();
        if lines.last().map(|l| l.is_empty()).unwrap_or(false) {
            lines.pop();
        }
        lines
    }
}

impl WriteRecords for Vec<u8> {
    type Error = Infallible;
    type Output = Vec<u8>;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.extend_from_slice(s.as_bytes());
        Ok(())
    }

    fn consume(r: Result<Self, Self::Error>) -> Self::Output {
        r.unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_vec_splits_on_line_end() {
        let mut lines: Vec<String> = Vec::new();
        lines.write_str("0a\n").unwrap();
        lines.line_end().unwrap();
        lines.write_str("ff\n").unwrap();
        lines.line_end().unwrap();

        assert_eq!(Vec::<String>::consume(Ok(lines)), vec!["0a\n", "ff\n"]);
    }

    #[test]
    fn line_vec_without_records_is_empty() {
        assert!(Vec::<String>::consume(Ok(Vec::new())).is_empty());
    }

    #[test]
    fn io_writer_flushes_on_finish() {
        let mut w = IOWriter::new(Vec::<u8>::new());
        w.write_str("41\n").unwrap();
        w.finish().unwrap();
        assert_eq!(w.0.get_ref(), b"41\n");
    }
}

/*!
 * Output writer for dumptxt
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{DumpTxtError, Result};

/// Prefix of the header line that opens every block
pub const HEADER_PREFIX: &str = "--- Conteúdo do arquivo: ";

/// Suffix of the header line that opens every block
pub const HEADER_SUFFIX: &str = " ---";

/// Format the header line (without trailing newline) for a file path
pub fn block_header(path: &Path) -> String {
    format!("{}{}{}", HEADER_PREFIX, path.display(), HEADER_SUFFIX)
}

/// Sink for the concatenated output.
///
/// The file is created or truncated when the writer is opened. Each block is
/// the header line, the raw content and a blank separator line.
pub struct ConcatWriter<W: Write = BufWriter<File>> {
    /// Output path, used for error reporting
    path: PathBuf,
    /// Underlying sink
    inner: W,
    /// Bytes written so far
    bytes_written: u64,
}

impl ConcatWriter {
    /// Create or truncate the output file
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| DumpTxtError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path, BufWriter::new(file)))
    }
}

impl<W: Write> ConcatWriter<W> {
    /// Wrap an arbitrary sink; `path` only labels errors
    pub fn new(path: &Path, inner: W) -> Self {
        Self {
            path: path.to_path_buf(),
            inner,
            bytes_written: 0,
        }
    }

    /// Append one block for `path` with its full `content`
    pub fn write_block(&mut self, path: &Path, content: &str) -> Result<()> {
        self.try_write_block(path, content)
            .map_err(|source| self.output_error(source))
    }

    fn try_write_block(&mut self, path: &Path, content: &str) -> io::Result<()> {
        self.write_all(block_header(path).as_bytes())?;
        self.write_all(b"\n")?;
        self.write_all(content.as_bytes())?;
        self.write_all(b"\n\n")
    }

    /// Number of bytes handed to the sink so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush buffered output and give back the sink
    pub fn finish(mut self) -> Result<W> {
        self.inner
            .flush()
            .map_err(|source| self.output_error(source))?;
        Ok(self.inner)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)?;
        self.bytes_written += buf.len() as u64;
        Ok(())
    }

    fn output_error(&self, source: io::Error) -> DumpTxtError {
        DumpTxtError::OutputWrite {
            path: self.path.clone(),
            source,
        }
    }
}

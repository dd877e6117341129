// std imports
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::ops::Range;
use std::path::{Path, PathBuf};

// local imports
use super::Stream;

// ---

/// A stream over a file opened for sequential reading.
///
/// The bytes read so far are retained, so spans produced from this stream stay
/// resolvable until it is dropped. The file handle is closed on drop.
#[derive(Debug)]
pub struct FileStream {
    path: PathBuf,
    reader: BufReader<File>,
    data: Vec<u8>,
    pos: usize,
    eof: bool,
}

impl FileStream {
    /// Opens the file at the given path for reading.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let description = describe(&path);

        let meta = fs::metadata(&path)
            .map_err(|e| io::Error::new(e.kind(), format!("failed to get information on {}: {}", description, e)))?;
        if meta.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is a directory", description),
            ));
        }

        let file =
            File::open(&path).map_err(|e| io::Error::new(e.kind(), format!("failed to open {}: {}", description, e)))?;
        log::debug!("opened {}", description);

        Ok(Self {
            path,
            reader: BufReader::new(file),
            data: Vec::with_capacity(meta.len().try_into().unwrap_or(0)),
            pos: 0,
            eof: false,
        })
    }

    /// Returns the path the stream was opened with.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn current(&mut self) -> io::Result<Option<u8>> {
        if self.pos >= self.data.len() && !self.eof {
            self.fill()?;
        }
        Ok(self.data.get(self.pos).copied())
    }

    fn fill(&mut self) -> io::Result<()> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => {
                    let n = buf.len();
                    if n == 0 {
                        log::debug!("reached end of {}", describe(&self.path));
                        self.eof = true;
                    } else {
                        self.data.extend_from_slice(buf);
                        self.reader.consume(n);
                    }
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(io::Error::new(
                        e.kind(),
                        format!("failed to read {}: {}", describe(&self.path), e),
                    ));
                }
            }
        }
    }
}

impl Stream for FileStream {
    #[inline]
    fn peek(&mut self) -> io::Result<Option<u8>> {
        self.current()
    }

    #[inline]
    fn get(&mut self) -> io::Result<Option<u8>> {
        let c = self.current()?;
        if c.is_some() {
            self.pos += 1;
        }
        Ok(c)
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> Option<&[u8]> {
        self.data.get(range)
    }
}

fn describe(path: &Path) -> String {
    format!("file {:?}", path)
}

//! Streaming line counting

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{LinetreeError, Result};

/// Read buffer size used when scanning files.
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Count the lines of the file at `path`.
///
/// A line is a run of bytes terminated by `\n`, `\r\n` or a lone `\r`, plus
/// a final unterminated run if the file does not end with a terminator. The
/// file is scanned in fixed-size chunks and closed before the count is
/// returned.
pub fn count_lines(path: &Path) -> Result<u64> {
    let file = File::open(path).map_err(|source| LinetreeError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    count_lines_from(BufReader::with_capacity(READ_BUFFER_SIZE, file)).map_err(|source| {
        LinetreeError::ReadFile {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Count lines from any buffered reader, draining it completely.
pub fn count_lines_from<R: Read>(mut reader: BufReader<R>) -> std::io::Result<u64> {
    let mut lines = 0u64;
    let mut last_byte: Option<u8> = None;
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }
        lines += (bytecount::count(buf, b'\n') + bytecount::count(buf, b'\r')) as u64;
        lines -= crlf_pairs(last_byte, buf);
        last_byte = buf.last().copied();
        let consumed = buf.len();
        reader.consume(consumed);
    }

    match last_byte {
        Some(b'\n' | b'\r') | None => Ok(lines),
        Some(_) => Ok(lines + 1),
    }
}

/// Number of `\r\n` pairs in `buf`, including one split across the previous
/// chunk whose final byte was `prev`.
fn crlf_pairs(prev: Option<u8>, buf: &[u8]) -> u64 {
    let inner = buf
        .windows(2)
        .filter(|pair| pair[0] == b'\r' && pair[1] == b'\n')
        .count() as u64;
    let split = u64::from(prev == Some(b'\r') && buf.first() == Some(&b'\n'));
    inner + split
}

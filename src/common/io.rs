use std::io::{self, Read};

/// Read a stream to EOF and split it into lines.
///
/// The whole input is buffered before any processing starts. Line
/// boundaries are found with SIMD-accelerated memchr; a `\r` before each
/// `\n` is stripped so CRLF input behaves like LF input. A trailing
/// fragment without a final newline still counts as a line, and zero
/// bytes of input yields zero lines.
pub fn read_input_lines(mut input: impl Read) -> io::Result<Vec<String>> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    let text = String::from_utf8(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let bytes = text.as_bytes();

    let mut lines = Vec::new();
    let mut start = 0usize;

    for pos in memchr::memchr_iter(b'\n', bytes) {
        let mut end = pos;
        if end > start && bytes[end - 1] == b'\r' {
            end -= 1;
        }
        lines.push(text[start..end].to_string());
        start = pos + 1;
    }

    // Last line without a trailing delimiter
    if start < bytes.len() {
        let mut end = bytes.len();
        if end > start && bytes[end - 1] == b'\r' {
            end -= 1;
        }
        lines.push(text[start..end].to_string());
    }

    Ok(lines)
}

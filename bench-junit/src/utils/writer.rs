use std::io::{Stderr, Stdout, Write};
use std::string::FromUtf8Error;

/// Output sink for commands: the report goes to `buffer`, diagnostics meant
/// for a person go to `err`.
pub struct Writer {
    buffer: WriteBuffer,
    err: WriteBuffer,
}

impl Default for Writer {
    fn default() -> Self {
        Self {
            buffer: WriteBuffer::Stdout(std::io::stdout()),
            err: WriteBuffer::Stderr(std::io::stderr()),
        }
    }
}

impl Writer {
    pub fn new(buffer: WriteBuffer, err: WriteBuffer) -> Self {
        Self { buffer, err }
    }

    pub fn write_err(&mut self, s: String) -> std::io::Result<()> {
        writeln!(self.err, "{s}")
    }

    pub fn into_string(self) -> Result<String, FromUtf8Error> {
        self.buffer.into_string()
    }

    pub fn err_into_string(self) -> Result<String, FromUtf8Error> {
        self.err.into_string()
    }

    pub fn err_to_stripped(self) -> Result<String, FromUtf8Error> {
        self.err.stripped()
    }

    pub fn stripped(self) -> Result<String, FromUtf8Error> {
        self.buffer.stripped()
    }
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.buffer.flush()
    }
}

pub enum WriteBuffer {
    Stdout(Stdout),
    Stderr(Stderr),
    Vec(Vec<u8>),
}

impl WriteBuffer {
    fn bytes(self) -> Vec<u8> {
        match self {
            WriteBuffer::Stdout(..) | WriteBuffer::Stderr(..) => vec![],
            WriteBuffer::Vec(vec) => vec,
        }
    }

    fn into_string(self) -> Result<String, FromUtf8Error> {
        String::from_utf8(self.bytes())
    }

    fn stripped(self) -> Result<String, FromUtf8Error> {
        let bytes = self.bytes();
        String::from_utf8(strip_ansi_escapes::strip(&bytes).unwrap_or(bytes))
    }
}

impl Write for WriteBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.write(buf),
            WriteBuffer::Stderr(stderr) => stderr.write(buf),
            WriteBuffer::Vec(vec) => vec.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.flush(),
            WriteBuffer::Stderr(stderr) => stderr.flush(),
            WriteBuffer::Vec(vec) => vec.flush(),
        }
    }
}

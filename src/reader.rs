use core::fmt;
use core::marker::PhantomData;

use embassy_futures::select::{select, Either};
use embassy_futures::yield_now;
use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};
use embedded_io::{ErrorKind, ReadReady};
use embedded_io_async::{Read, Write as AsyncWrite};

use crate::echo::{Echo, EchoPolicy};
use crate::line_buffer::{Line, LineBuffer, LineStorage};
use crate::writer::TerminalWriter;

/// Configuration for the line reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReaderConfig {
    /// What to write back per accepted or erased character
    pub echo: EchoPolicy,
    /// Drop printable bytes once the line holds this many. `None` means no
    /// limit beyond what the storage can hold.
    pub max_len: Option<usize>,
}

impl ReaderConfig {
    /// Echo input as typed
    pub const fn visible() -> Self {
        Self {
            echo: EchoPolicy::Visible,
            max_len: None,
        }
    }

    /// Echo nothing
    pub const fn hidden() -> Self {
        Self {
            echo: EchoPolicy::Hidden,
            max_len: None,
        }
    }

    /// Echo `symbol` in place of each character
    pub const fn masked(symbol: char) -> Self {
        Self {
            echo: EchoPolicy::Masked(symbol),
            max_len: None,
        }
    }

    pub const fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

/// How an input byte is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteClass {
    /// `\r` or `\n`
    Terminator,
    /// Backspace (8) or DEL (127)
    Erase,
    /// Printable ASCII, space through `~`
    Printable(u8),
    Other,
}

impl ByteClass {
    pub const fn of(byte: u8) -> Self {
        match byte {
            b'\r' | b'\n' => ByteClass::Terminator,
            0x08 | 0x7F => ByteClass::Erase,
            0x20..=0x7E => ByteClass::Printable(byte),
            _ => ByteClass::Other,
        }
    }
}

/// Result of feeding one byte to the line buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Byte appended; write this feedback
    Accepted(Echo),
    /// Last character removed; `visual` tells whether to draw the erase
    Erased { visual: bool },
    /// Byte had no effect
    Ignored,
    /// Printable byte dropped because the line is full
    Overflow,
    /// Line terminator received
    Complete,
}

/// Errors that can occur while reading a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadLineError {
    /// The byte source failed
    Read(ErrorKind),
    /// The sink failed
    Write(ErrorKind),
    /// The byte source reached end of stream
    Disconnected,
    /// The cancel signal fired before a terminator arrived
    Cancelled,
}

impl embedded_io::Error for ReadLineError {
    fn kind(&self) -> ErrorKind {
        match *self {
            ReadLineError::Read(kind) | ReadLineError::Write(kind) => kind,
            ReadLineError::Disconnected => ErrorKind::NotConnected,
            ReadLineError::Cancelled => ErrorKind::Interrupted,
        }
    }
}

impl fmt::Display for ReadLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadLineError::Read(kind) => write!(f, "read failed: {kind:?}"),
            ReadLineError::Write(kind) => write!(f, "write failed: {kind:?}"),
            ReadLineError::Disconnected => f.write_str("input disconnected"),
            ReadLineError::Cancelled => f.write_str("line input cancelled"),
        }
    }
}

/// Reads one line at a time from a serial byte source
///
/// A fresh [`LineBuffer`] backed by `S` is created for every call, so the
/// reader itself carries no state between lines.
pub struct LineReader<S: LineStorage> {
    config: ReaderConfig,
    _storage: PhantomData<fn() -> S>,
}

impl<S: LineStorage> fmt::Debug for LineReader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineReader")
            .field("config", &self.config)
            .finish()
    }
}

impl<S: LineStorage> LineReader<S> {
    pub const fn new(config: ReaderConfig) -> Self {
        Self {
            config,
            _storage: PhantomData,
        }
    }

    pub const fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Apply one byte to `buffer`
    pub fn process_byte(&self, buffer: &mut LineBuffer<S>, byte: u8) -> Step {
        match ByteClass::of(byte) {
            ByteClass::Terminator => Step::Complete,
            ByteClass::Erase => {
                if buffer.erase_last() {
                    Step::Erased {
                        visual: self.config.echo.erases_visually(),
                    }
                } else {
                    Step::Ignored
                }
            }
            ByteClass::Printable(byte) => {
                if self.config.max_len.is_some_and(|max| buffer.len() >= max) {
                    return Step::Overflow;
                }
                match buffer.push(byte) {
                    Ok(()) => Step::Accepted(self.config.echo.feedback(byte)),
                    Err(_) => Step::Overflow,
                }
            }
            ByteClass::Other => {
                log::trace!("discarding non-printable byte {:#04x}", byte);
                Step::Ignored
            }
        }
    }

    /// Read a complete line from `source`, echoing to `sink`
    ///
    /// Returns once `\r` or `\n` arrives. Either byte ends the line on its
    /// own, so a terminal sending `\r\n` yields an extra empty line on the
    /// next call.
    pub async fn read_line<R, W>(
        &self,
        source: &mut R,
        sink: &mut W,
    ) -> Result<Line<S>, ReadLineError>
    where
        R: Read + ReadReady,
        W: AsyncWrite,
    {
        let mut writer = TerminalWriter::new(sink, false);
        let mut buffer = LineBuffer::<S>::new();

        loop {
            let byte = next_byte(source).await?;

            let written = match self.process_byte(&mut buffer, byte) {
                Step::Complete => {
                    let line = buffer.finish();
                    writer.line_end().await.map_err(write_error)?;
                    log::debug!("line complete, {} bytes", line.len());
                    return Ok(line);
                }
                Step::Accepted(Echo::Byte(b)) => writer.write_bytes(&[b]).await,
                Step::Accepted(Echo::Symbol(symbol)) => writer.write_char(symbol).await,
                Step::Erased { visual: true } => writer.erase().await,
                Step::Overflow => {
                    log::warn!("line full at {} bytes, dropping input", buffer.len());
                    Ok(())
                }
                Step::Accepted(Echo::Nothing)
                | Step::Erased { visual: false }
                | Step::Ignored => Ok(()),
            };
            written.map_err(write_error)?;
        }
    }

    /// Like [`read_line`](Self::read_line), but gives up when `cancel` is
    /// signalled. The partial line is discarded.
    pub async fn read_line_until<R, W, M>(
        &self,
        source: &mut R,
        sink: &mut W,
        cancel: &Signal<M, ()>,
    ) -> Result<Line<S>, ReadLineError>
    where
        R: Read + ReadReady,
        W: AsyncWrite,
        M: RawMutex,
    {
        match select(self.read_line(source, sink), cancel.wait()).await {
            Either::First(result) => result,
            Either::Second(()) => {
                log::debug!("line input cancelled");
                Err(ReadLineError::Cancelled)
            }
        }
    }
}

/// Wait for one byte, yielding to other tasks while none is available
async fn next_byte<R: Read + ReadReady>(source: &mut R) -> Result<u8, ReadLineError> {
    let mut byte = [0u8; 1];
    loop {
        if source.read_ready().map_err(read_error)? {
            return match source.read(&mut byte).await.map_err(read_error)? {
                0 => {
                    log::debug!("byte source reached end of stream");
                    Err(ReadLineError::Disconnected)
                }
                _ => Ok(byte[0]),
            };
        }
        yield_now().await;
    }
}

fn read_error<E: embedded_io::Error>(e: E) -> ReadLineError {
    ReadLineError::Read(e.kind())
}

fn write_error<E: embedded_io::Error>(e: E) -> ReadLineError {
    ReadLineError::Write(e.kind())
}

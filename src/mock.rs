//! Scripted serial endpoints for tests

use std::collections::VecDeque;
use std::vec::Vec;

use embedded_io::{ErrorKind, ErrorType, ReadReady};

/// Byte source that can report "nothing available" between bytes
pub struct MockSource {
    pending: VecDeque<u8>,
    idle_polls: usize,
    idle_left: usize,
    fail: Option<ErrorKind>,
    polls: usize,
}

impl MockSource {
    pub fn new(input: &[u8]) -> Self {
        Self {
            pending: input.iter().copied().collect(),
            idle_polls: 0,
            idle_left: 0,
            fail: None,
            polls: 0,
        }
    }

    /// Report "not ready" this many times before every byte
    pub fn with_idle_polls(mut self, idle_polls: usize) -> Self {
        self.idle_polls = idle_polls;
        self.idle_left = idle_polls;
        self
    }

    /// Fail reads with `kind` once the scripted bytes run out
    pub fn failing_with(mut self, kind: ErrorKind) -> Self {
        self.fail = Some(kind);
        self
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Number of `read_ready` calls that returned `false`
    pub fn idle_count(&self) -> usize {
        self.polls
    }
}

impl ErrorType for MockSource {
    type Error = ErrorKind;
}

impl ReadReady for MockSource {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        if self.pending.is_empty() {
            // Exhausted: either fail on the read or report end of stream
            return Ok(true);
        }
        if self.idle_left > 0 {
            self.idle_left -= 1;
            self.polls += 1;
            return Ok(false);
        }
        Ok(true)
    }
}

impl embedded_io_async::Read for MockSource {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match self.pending.pop_front() {
            Some(byte) => {
                buf[0] = byte;
                self.idle_left = self.idle_polls;
                Ok(1)
            }
            None => match self.fail {
                Some(kind) => Err(kind),
                None => Ok(0),
            },
        }
    }
}

/// Byte source that never has anything to read
pub struct SilentSource;

impl ErrorType for SilentSource {
    type Error = ErrorKind;
}

impl ReadReady for SilentSource {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

impl embedded_io_async::Read for SilentSource {
    async fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        Err(ErrorKind::Unsupported)
    }
}

/// Sink recording everything written to it
pub struct MockSink {
    written: Vec<u8>,
    fail: Option<ErrorKind>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            written: Vec::new(),
            fail: None,
        }
    }

    pub fn failing_with(kind: ErrorKind) -> Self {
        Self {
            written: Vec::new(),
            fail: Some(kind),
        }
    }

    pub fn output(&self) -> &[u8] {
        &self.written
    }
}

impl ErrorType for MockSink {
    type Error = ErrorKind;
}

impl embedded_io_async::Write for MockSink {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if let Some(kind) = self.fail {
            return Err(kind);
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        match self.fail {
            Some(kind) => Err(kind),
            None => Ok(()),
        }
    }
}

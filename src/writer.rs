use embedded_io_async::Write as AsyncWrite;

/// Sequence ending a completed line
pub const LINE_END: &str = "\r\n";

/// Default line ending used by [`TerminalWriter::print_default`]
pub const PRINT_END: &str = "\n\r";

/// Backspace, space, backspace: blanks the character left of the cursor
pub const ERASE_SEQUENCE: &[u8] = b"\x08 \x08";

/// Terminal writer used as the output sink of the line reader
pub struct TerminalWriter<'a, W: AsyncWrite> {
    writer: &'a mut W,
    ansi_enabled: bool,
}

impl<'a, W: AsyncWrite> TerminalWriter<'a, W> {
    /// Create a new terminal writer
    pub fn new(writer: &'a mut W, ansi_enabled: bool) -> Self {
        Self {
            writer,
            ansi_enabled,
        }
    }

    /// Write raw bytes and flush
    pub async fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), W::Error> {
        self.writer.write_all(bytes).await?;
        self.writer.flush().await
    }

    /// Write a string
    pub async fn write_str(&mut self, s: &str) -> Result<(), W::Error> {
        self.write_bytes(s.as_bytes()).await
    }

    /// Write a single character, UTF-8 encoded
    pub async fn write_char(&mut self, c: char) -> Result<(), W::Error> {
        let mut encoded = [0u8; 4];
        self.write_str(c.encode_utf8(&mut encoded)).await
    }

    /// Move to the start of the next line
    pub async fn line_end(&mut self) -> Result<(), W::Error> {
        self.write_str(LINE_END).await
    }

    /// Write a line (adds \r\n)
    pub async fn writeln(&mut self, s: &str) -> Result<(), W::Error> {
        self.write_str(s).await?;
        self.line_end().await
    }

    /// Write `text` followed by `end`
    pub async fn print(&mut self, text: &str, end: &str) -> Result<(), W::Error> {
        self.write_str(text).await?;
        self.write_str(end).await
    }

    /// Write `text` followed by [`PRINT_END`]
    pub async fn print_default(&mut self, text: &str) -> Result<(), W::Error> {
        self.print(text, PRINT_END).await
    }

    /// Blank out the character left of the cursor
    pub async fn erase(&mut self) -> Result<(), W::Error> {
        self.write_bytes(ERASE_SEQUENCE).await
    }

    /// Clear the current line
    pub async fn clear_line(&mut self) -> Result<(), W::Error> {
        if self.ansi_enabled {
            self.write_str("\r\x1b[K").await
        } else {
            self.write_str("\r").await
        }
    }

    /// Flush the writer
    pub async fn flush(&mut self) -> Result<(), W::Error> {
        self.writer.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSink;
    use embassy_futures::block_on;

    #[test]
    fn test_print_default_end() {
        let mut sink = MockSink::new();
        block_on(TerminalWriter::new(&mut sink, false).print_default("ok")).unwrap();
        assert_eq!(sink.output(), b"ok\n\r");
    }

    #[test]
    fn test_erase_sequence() {
        let mut sink = MockSink::new();
        block_on(TerminalWriter::new(&mut sink, false).erase()).unwrap();
        assert_eq!(sink.output(), b"\x08 \x08");
    }

    #[test]
    fn test_writeln_and_clear_line() {
        let mut sink = MockSink::new();
        let mut writer = TerminalWriter::new(&mut sink, true);
        block_on(writer.writeln("FireworkOS")).unwrap();
        block_on(writer.clear_line()).unwrap();
        block_on(writer.flush()).unwrap();
        assert_eq!(sink.output(), b"FireworkOS\r\n\r\x1b[K");
    }

    #[test]
    fn test_write_char_encodes_utf8() {
        let mut sink = MockSink::new();
        block_on(TerminalWriter::new(&mut sink, false).write_char('•')).unwrap();
        assert_eq!(sink.output(), "•".as_bytes());
    }
}

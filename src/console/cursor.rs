use crossterm::{cursor, execute};
use std::io::{self, Write};

/// Hides the cursor while alive and shows it again on drop.
///
/// Writes go through the guard, so it can stand in for the wrapped writer.
pub struct HiddenCursor<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> HiddenCursor<'a, W> {
    pub fn new(out: &'a mut W) -> io::Result<Self> {
        execute!(out, cursor::Hide)?;
        Ok(Self { out })
    }
}

impl<W: Write> Write for HiddenCursor<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for HiddenCursor<'_, W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show);
    }
}

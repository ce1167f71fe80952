//! Output surfaces the renderer can draw rows onto
//!
//! A view only has to support clearing and appending one text row. `finish`
//! marks the end of a complete render so buffered surfaces can flush and
//! recording surfaces can snapshot.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

use crate::utils::ANSI_CLEAR_SCREEN;

/// Ordered sequence of text rows that can be wiped and appended to.
pub trait View: Send + 'static {
    /// Remove every displayed row.
    fn clear(&mut self) -> io::Result<()>;

    /// Append one row after the current last row.
    fn append_row(&mut self, row: &str) -> io::Result<()>;

    /// Called once after a full render has been written.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    rows: Vec<String>,
    history: Vec<Vec<String>>,
    clears: usize,
}

/// In-memory view whose contents can be observed from another task.
///
/// Clones share the same rows, so a caller can keep one handle while the
/// dispatch worker owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows currently displayed.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.state.lock().rows.clone()
    }

    /// Every completed render, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<Vec<String>> {
        self.state.lock().history.clone()
    }

    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.state.lock().clears
    }
}

impl View for MemoryView {
    fn clear(&mut self) -> io::Result<()> {
        let mut state = self.state.lock();
        state.rows.clear();
        state.clears += 1;
        Ok(())
    }

    fn append_row(&mut self, row: &str) -> io::Result<()> {
        self.state.lock().rows.push(row.to_string());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        let mut state = self.state.lock();
        let snapshot = state.rows.clone();
        state.history.push(snapshot);
        Ok(())
    }
}

/// Line-oriented view over any writer, normally stdout.
///
/// With `ansi` off, `clear` can only print a separating blank line; earlier
/// renders stay visible above the current one.
pub struct TerminalView<W: Write + Send + 'static> {
    writer: W,
    ansi: bool,
}

impl TerminalView<io::Stdout> {
    #[must_use]
    pub fn stdout(ansi: bool) -> Self {
        Self::new(io::stdout(), ansi)
    }
}

impl<W: Write + Send + 'static> TerminalView<W> {
    #[must_use]
    pub fn new(writer: W, ansi: bool) -> Self {
        Self { writer, ansi }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + 'static> View for TerminalView<W> {
    fn clear(&mut self) -> io::Result<()> {
        if self.ansi {
            self.writer.write_all(ANSI_CLEAR_SCREEN.as_bytes())?;
        } else {
            // Plain output cannot erase; separate renders instead.
            writeln!(self.writer)?;
        }
        self.writer.flush()
    }

    fn append_row(&mut self, row: &str) -> io::Result<()> {
        writeln!(self.writer, "{row}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

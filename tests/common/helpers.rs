use std::io;
use std::sync::{atomic::AtomicBool, Arc, Mutex, MutexGuard};
use ttybar::{Console, ConsoleBuilder, Terminal, WindowSize};

pub const RESTORE: &[u8] = b"\x1b8";
pub const SAVE: &[u8] = b"\x1b7";

#[derive(Debug, Default)]
struct FakeState {
    interactive: bool,
    size: Option<WindowSize>,
    size_queries: usize,
    writes: Vec<Vec<u8>>,
    flushes: usize,
    fail_writes: bool,
    line_lock: Option<Arc<AtomicBool>>,
}

/// In-memory terminal. Clones share state, so a test can keep one handle
/// while the console owns another.
#[derive(Debug, Clone, Default)]
pub struct FakeTerminal {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTerminal {
    /// An interactive terminal `columns` wide and 24 rows high.
    pub fn interactive(columns: u16) -> Self {
        let terminal = Self::default();
        {
            let mut state = terminal.state();
            state.interactive = true;
            state.size = Some(WindowSize::new(columns, 24));
        }
        terminal
    }

    /// A non-interactive output such as a pipe.
    pub fn piped() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    /// Share `lock` with every console built on this terminal.
    pub fn with_line_lock(self, lock: Arc<AtomicBool>) -> Self {
        self.state().line_lock = Some(lock);
        self
    }

    /// Change what the next size query reports. `None` makes it fail.
    pub fn set_size(&self, size: Option<WindowSize>) {
        self.state().size = size;
    }

    pub fn set_columns(&self, columns: u16) {
        self.set_size(Some(WindowSize::new(columns, 24)));
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.state().fail_writes = fail;
    }

    pub fn size_queries(&self) -> usize {
        self.state().size_queries
    }

    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.state().writes.clone()
    }

    pub fn write_count(&self) -> usize {
        self.state().writes.len()
    }

    pub fn last_write(&self) -> Vec<u8> {
        self.state().writes.last().cloned().unwrap_or_default()
    }

    pub fn flushes(&self) -> usize {
        self.state().flushes
    }

    pub fn output(&self) -> Vec<u8> {
        self.state().writes.concat()
    }

    pub fn clear(&self) {
        self.state().writes.clear();
    }
}

impl Terminal for FakeTerminal {
    fn is_interactive(&self) -> bool {
        self.state().interactive
    }

    fn window_size(&self) -> Option<WindowSize> {
        let mut state = self.state();
        state.size_queries += 1;
        state.size
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        let mut state = self.state();
        if state.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "fake write failure"));
        }
        state.writes.push(buf.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.state().flushes += 1;
        Ok(())
    }

    fn line_lock(&self) -> Option<Arc<AtomicBool>> {
        self.state().line_lock.clone()
    }
}

/// A console on a fake interactive terminal, without signal handling.
pub fn create_test_console(columns: u16) -> (Console<FakeTerminal>, FakeTerminal) {
    let terminal = FakeTerminal::interactive(columns);
    let console = ConsoleBuilder::new()
        .watch_resize(false)
        .build_with(terminal.clone());
    (console, terminal)
}

/// Strip the restore-cursor prefix from a redraw and return the row.
pub fn row_of(frame: &[u8]) -> String {
    assert!(
        frame.starts_with(RESTORE),
        "redraw should start with restore-cursor: {:?}",
        String::from_utf8_lossy(frame)
    );
    String::from_utf8(frame[RESTORE.len()..].to_vec()).expect("row should be UTF-8")
}

/// Number of `=` cells inside the brackets of a rendered row.
pub fn filled_cells(row: &str) -> usize {
    let open = row.rfind('[').expect("row should contain '['");
    let close = row.rfind(']').expect("row should contain ']'");
    row[open + 1..close].chars().filter(|&c| c == '=').count()
}

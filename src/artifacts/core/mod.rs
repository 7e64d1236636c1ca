//! Output plumbing shared by the commands
//!
//! Long output (the history) can be routed through the `minus` pager. The
//! repository only ever sees a `Box<dyn Write>`, so the pager is wrapped in
//! [`PagerWriter`] and flushed to the terminal once the command finishes.

use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter over a `minus` pager
#[derive(Clone)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn new() -> Self {
        PagerWriter {
            pager: Pager::new(),
        }
    }

    /// Display everything written so far and wait for the user to quit
    pub fn page(self) -> anyhow::Result<()> {
        minus::page_all(self.pager)?;
        Ok(())
    }
}

impl Default for PagerWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

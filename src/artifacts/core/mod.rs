//! Output plumbing shared by the commands
//!
//! Diff output goes either straight to stdout or through the `minus` pager
//! when a person is watching the terminal.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that turns paging off regardless of the terminal
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Adapts the `minus` pager to `std::io::Write`, so that a diff can be
/// printed the same way whether it ends up paged or on stdout.
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "+ 1\t\t  added")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Paging only happens on an interactive stdout that nobody opted out of
pub fn should_page(no_pager: bool) -> bool {
    !no_pager && std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal()
}

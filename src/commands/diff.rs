use crate::areas::session::Session;
use crate::artifacts::diff::algorithm::DiffAlgorithm;
use crate::artifacts::diff::diff_record::{DiffKind, DiffRecord};
use crate::artifacts::document::document::Document;
use crate::artifacts::document::line::Line;
use colored::Colorize;
use is_terminal::IsTerminal;
use log::debug;
use std::io::Write;

const ABSENT_PLACEHOLDER: &str = " ";

impl Session {
    /// Diffs the two texts with the session's algorithm and context window and
    /// prints the records. Returns how many records were printed.
    pub fn diff(&self, previous: &str, current: &str) -> anyhow::Result<usize> {
        let previous = Document::parse(previous);
        let current = Document::parse(current);
        let options = self.options();

        debug!(
            "diffing {} against {} lines with {} ({} context)",
            previous.len(),
            current.len(),
            options.algorithm,
            options.context
        );

        let records = options
            .algorithm
            .compute_diff(&previous, &current, options.context)?;
        self.print_records(&records)?;

        Ok(records.len())
    }

    pub fn print_records(&self, records: &[DiffRecord]) -> anyhow::Result<()> {
        let colorize = self
            .options()
            .color
            .enabled(std::io::stdout().is_terminal());

        for record in records {
            self.print_record(record, colorize)?;
        }

        Ok(())
    }

    fn print_record(&self, record: &DiffRecord, colorize: bool) -> anyhow::Result<()> {
        let line = render_line(record);

        if !colorize {
            writeln!(self.writer(), "{line}")?;
            return Ok(());
        }

        match record.kind() {
            DiffKind::Added => writeln!(self.writer(), "{}", line.green())?,
            DiffKind::Deleted => writeln!(self.writer(), "{}", line.red())?,
            DiffKind::Unchanged => writeln!(self.writer(), "{line}")?,
        }

        Ok(())
    }
}

/// `<marker> <old number>\t<new number>\t  <text>`, blanking the absent side
pub fn render_line(record: &DiffRecord) -> String {
    format!(
        "{} {}\t{}\t  {}",
        record.kind().marker(),
        line_number(record.old_line()),
        line_number(record.new_line()),
        record.text()
    )
}

fn line_number(line: &Line) -> String {
    if line.is_absent() {
        ABSENT_PLACEHOLDER.to_string()
    } else {
        line.line_number().to_string()
    }
}

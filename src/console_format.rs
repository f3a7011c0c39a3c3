/// Console formatting module - Pure rendering concerns
///
/// This module handles all console output formatting including:
/// - Key/value card layout and borders
/// - Color terminal output
/// - Text truncation and padding
///
/// Reports are wide (up to eleven columns, some holding multi-line rule
/// lists), so each row is drawn as its own two-column card of
/// `column label │ value` lines instead of one very wide line.
///
/// ## Output Flexibility
///
/// `TableWriter` writes to any `std::io::Write` destination: stdout, a
/// `Vec<u8>` buffer in tests, or a file.
use crate::report::{Report, ReportRow, ReportSummary, RowEntry};
use std::io::{self, Write};
use std::sync::OnceLock;
use term::color::Color;
use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Writer for table output - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    use_colors: bool,
    widths: TableWidths,
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer
    pub fn new(writer: W, use_colors: bool, widths: TableWidths) -> Self {
        Self { writer, use_colors, widths }
    }

    /// Write formatted text, optionally with color
    fn write_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.use_colors {
            // term colors 0-7 are normal, 8-15 bright
            let code = if color < 8 { 30 + color } else { 90 + (color - 8) };
            write!(self.writer, "\x1b[{}m{}\x1b[0m", code, text)
        } else {
            write!(self.writer, "{}", text)
        }
    }

    fn write_border(&mut self, left: char, middle: char, right: char) -> io::Result<()> {
        let w = self.widths;
        writeln!(self.writer, "{}{:─<label$}{}{:─<value$}{}", left, "", middle, "", right, label = w.label, value = w.value)
    }

    fn write_line(&mut self, label: &str, value: &str, color: Option<Color>) -> io::Result<()> {
        let w = self.widths;
        let line = format!(
            "│ {} │ {} │",
            truncate_with_padding(label, w.label - 2),
            truncate_with_padding(value, w.value - 2)
        );
        match color {
            Some(color) => self.write_colored(&line, color)?,
            None => write!(self.writer, "{}", line)?,
        }
        writeln!(self.writer)
    }

    /// Write the report title line
    pub fn write_title(&mut self, report: &Report) -> io::Result<()> {
        writeln!(self.writer, "\n{} ({} of {} records)\n", report.title, report.entries.len(), report.scanned)
    }

    /// Write one built row as label/value lines; multi-line values continue
    /// under an empty label.
    pub fn write_row(&mut self, row: &ReportRow) -> io::Result<()> {
        for (label, cell) in row.iter() {
            let text = cell.to_string();
            let mut lines = text.lines();
            self.write_line(label, lines.next().unwrap_or(""), None)?;
            for continuation in lines {
                self.write_line("", continuation, None)?;
            }
        }
        Ok(())
    }

    /// Write the placeholder for a record whose row could not be built
    pub fn write_failed_row(&mut self, record: usize, error: &str) -> io::Result<()> {
        self.write_line(&format!("⚠ record {}", record), error, Some(term::color::BRIGHT_RED))
    }

    /// Write a whole report: title, then one card per entry
    pub fn write_report(&mut self, report: &Report) -> io::Result<()> {
        self.write_title(report)?;

        if report.entries.is_empty() {
            return writeln!(self.writer, "No matching records.");
        }

        self.write_border('┌', '┬', '┐')?;
        for (i, entry) in report.entries.iter().enumerate() {
            if i > 0 {
                self.write_border('├', '┼', '┤')?;
            }
            match entry {
                RowEntry::Built(row) => self.write_row(row)?,
                RowEntry::Failed { record, error } => self.write_failed_row(*record, &error.to_string())?,
            }
        }
        self.write_border('└', '┴', '┘')
    }

    /// Write an error message behind a colored `error:` prefix
    pub fn write_error(&mut self, message: &str) -> io::Result<()> {
        self.write_colored("error", term::color::BRIGHT_RED)?;
        writeln!(self.writer, ": {}", message)
    }

    /// Write the summary block
    pub fn write_summary(&mut self, summary: &ReportSummary) -> io::Result<()> {
        writeln!(self.writer, "\n=== Summary ===")?;
        writeln!(self.writer, "Scanned:   {}", summary.scanned)?;
        writeln!(self.writer, "Matched:   {}", summary.matched)?;
        writeln!(self.writer, "✓ Rendered: {}", summary.rendered)?;
        if summary.failed > 0 {
            self.write_colored(&format!("⚠ Failed:   {}", summary.failed), term::color::BRIGHT_YELLOW)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

//
// Table Layout and Widths
//

/// Column widths for the two-column card layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableWidths {
    pub label: usize,
    pub value: usize,
    pub total: usize, // Total table width including borders
}

impl TableWidths {
    /// Narrowest value column we will draw, whatever the terminal says
    const MIN_VALUE: usize = 20;

    pub fn new(terminal_width: usize, columns: &[String]) -> Self {
        // Borders: │ = 3 characters (left, middle, right)
        let borders = 3;
        let available = terminal_width.saturating_sub(borders);

        // Label column fits the longest label plus one space each side,
        // but never takes more than half the table
        let longest = columns.iter().map(|c| display_width(c)).max().unwrap_or(0).max(display_width("⚠ record 000"));
        let label = (longest + 2).min(available / 2).max(4);

        let value = available.saturating_sub(label).max(Self::MIN_VALUE);

        TableWidths { label, value, total: label + value + borders }
    }
}

// Set by --console-width
static CONSOLE_WIDTH: OnceLock<usize> = OnceLock::new();

/// Override the detected terminal width (first call wins)
pub fn set_console_width(width: usize) {
    let _ = CONSOLE_WIDTH.set(width);
}

/// Terminal width: override, detected size, or 120
fn get_terminal_width() -> usize {
    if let Some(width) = CONSOLE_WIDTH.get() {
        return *width;
    }
    if let Some((Width(w), _)) = terminal_size() { w as usize } else { 120 }
}

/// Widths for rendering `report` on the current terminal
pub fn widths_for(report: &Report) -> TableWidths {
    TableWidths::new(get_terminal_width(), &report.columns)
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate and pad string to exact width
pub fn truncate_with_padding(s: &str, width: usize) -> String {
    let display_w = display_width(s);

    if display_w > width {
        let mut result = String::new();
        let mut current_width = 0;

        // Reserve space for "..."
        let target_width = if width >= 3 { width - 3 } else { width };

        for c in s.chars() {
            let c_width = UnicodeWidthChar::width(c).unwrap_or(1);

            if current_width + c_width > target_width {
                break;
            }

            result.push(c);
            current_width += c_width;
        }

        if width >= 3 {
            result.push_str("...");
            current_width += 3;
        }

        if current_width < width {
            result.push_str(&" ".repeat(width - current_width));
        }

        result
    } else {
        format!("{}{}", s, " ".repeat(width - display_w))
    }
}

/// Print a report to stdout, failed rows in color
pub fn print_report(report: &Report) {
    let mut writer = TableWriter::new(io::stdout(), true, widths_for(report));
    let _ = writer.write_report(report);
}

/// Print the summary block to stdout
pub fn print_summary(summary: &ReportSummary) {
    let mut writer = TableWriter::new(io::stdout(), true, TableWidths::new(get_terminal_width(), &[]));
    let _ = writer.write_summary(summary);
}

/// Print an error message to stdout
pub fn print_error(message: &str) {
    let mut writer = TableWriter::new(io::stdout(), true, TableWidths::new(get_terminal_width(), &[]));
    let _ = writer.write_error(message);
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;

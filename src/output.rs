use owo_colors::{OwoColorize, Style};
use std::io::{self, Write};
use terminal_size::{terminal_size, Width};
use unicode_width::UnicodeWidthStr;

const MAX_RULE_WIDTH: usize = 50;

/// Line-oriented console writer. With color off every line is written
/// exactly as given.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, message: &str, style: Style) -> String {
        if self.color {
            message.style(style).to_string()
        } else {
            message.to_string()
        }
    }

    fn styled_line(&mut self, message: &str, style: Style) -> io::Result<()> {
        let text = self.paint(message, style);
        writeln!(self.out, "{}", text)
    }

    /// Print a line with no styling (menus, prompts, raw data)
    pub fn line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    /// Print an info message (cyan)
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        self.styled_line(message, Style::new().cyan())
    }

    /// Print a result line (green)
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        self.styled_line(message, Style::new().green())
    }

    /// Print a warning (yellow)
    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        self.styled_line(message, Style::new().yellow())
    }

    /// Print an error (red)
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.styled_line(message, Style::new().red())
    }

    /// Print a dimmed detail line
    pub fn detail(&mut self, message: &str) -> io::Result<()> {
        self.styled_line(message, Style::new().dimmed())
    }

    /// Print a startup banner
    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        let rule = "═".repeat(rule_width());
        let rule = self.paint(&rule, Style::new().bright_cyan());
        let title = self.paint(title, Style::new().bright_cyan().bold());
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "  {}", title)?;
        writeln!(self.out, "{}", rule)
    }

    /// Print a section header padded out to the rule width
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        let fill = rule_width().saturating_sub(title.width() + 5);
        let lead = self.paint("───", Style::new().bright_white().dimmed());
        let tail = self.paint(&"─".repeat(fill), Style::new().bright_white().dimmed());
        let title = self.paint(title, Style::new().bright_white().bold());
        writeln!(self.out)?;
        writeln!(self.out, "{} {} {}", lead, title, tail)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

fn rule_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| usize::from(w))
        .unwrap_or(MAX_RULE_WIDTH)
        .min(MAX_RULE_WIDTH)
}

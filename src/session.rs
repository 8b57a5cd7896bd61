use crate::config::{Config, ReportFormat};
use crate::engine::{self, Selection, SortOutcome, SortRequest};
use crate::error::Result;
use crate::output::Console;
use crate::parser::{self, Request};
use crate::random::RandomGenerator;
use crate::report;
use crate::IntegerList;
use std::io::{BufRead, Write};

pub const MENU: [&str; 4] = [
    "Please select the sorting algorithm you wish to use by typing 1, 2, or 3.",
    "1. Insert sort",
    "2. Bubble sort",
    "3. Both insert and bubble sort",
];

pub const NUMBERS_PROMPT: &str = "Please enter the list of positive integers (<= 999999999) you wish to sort, \
separated by spaces, or enter 'random' followed by the number of random integers you wish to sort. \
e.g. random 200. Max # of integers to sort = 999999999.";

pub const INVALID_SELECTION: &str = "Invalid input.";

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Interactive select → read → sort → report loop over any line source.
pub struct Session<R: BufRead, W: Write> {
    config: Config,
    input: R,
    console: Console<W>,
    generator: RandomGenerator,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        let console = Console::new(output, config.color);
        let generator = RandomGenerator::new(config.progress_threshold);
        Self {
            config,
            input,
            console,
            generator,
        }
    }

    pub fn into_output(self) -> W {
        self.console.into_inner()
    }

    /// Run turns until input ends or the user quits. Returns the number of
    /// completed sorts.
    pub fn run(&mut self) -> Result<usize> {
        self.console.banner("NUMBER SORTER")?;
        let mut completed = 0;

        loop {
            let Some(selection) = self.select_algorithm()? else {
                break;
            };
            let Some(list) = self.request_list()? else {
                break;
            };

            let outcomes = engine::execute(&SortRequest::new(selection, list))?;
            self.report(&outcomes)?;
            completed += 1;
        }

        self.console.info("Goodbye.")?;
        self.console.flush()?;
        tracing::info!(completed, "session finished");
        Ok(completed)
    }

    /// Next input line, or `None` on end of input or a quit word.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, which the validator rejects
    /// as a non-digit, so bad input re-prompts instead of ending the session.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.console.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf).into_owned();

        let trimmed = line.trim();
        if QUIT_WORDS
            .iter()
            .any(|word| trimmed.eq_ignore_ascii_case(word))
        {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn select_algorithm(&mut self) -> Result<Option<Selection>> {
        loop {
            self.console.section("Algorithm")?;
            for line in MENU {
                self.console.line(line)?;
            }

            let Some(choice) = self.read_line()? else {
                return Ok(None);
            };
            match choice.parse::<Selection>() {
                Ok(selection) => return Ok(Some(selection)),
                Err(e) => {
                    tracing::debug!(error = %e, "rejected menu choice");
                    self.console.warn(INVALID_SELECTION)?;
                }
            }
        }
    }

    fn request_list(&mut self) -> Result<Option<IntegerList>> {
        loop {
            self.console.line(NUMBERS_PROMPT)?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parser::parse_request(&line) {
                Ok(Request::Literal(list)) => {
                    tracing::debug!(len = list.len(), "parsed literal list");
                    return Ok(Some(list));
                }
                Ok(Request::Random(count)) => {
                    let list = self.generator.generate(count);
                    if self.config.show_initial {
                        self.console.detail(&report::format_initial(&list))?;
                    }
                    return Ok(Some(list));
                }
                Err(reasons) => {
                    tracing::debug!(?reasons, "rejected number list");
                    self.console
                        .error(&report::format_validation_error(&reasons))?;
                }
            }
        }
    }

    fn report(&mut self, outcomes: &[SortOutcome]) -> Result<()> {
        self.console.section("Results")?;
        for outcome in outcomes {
            match self.config.report_format {
                ReportFormat::Text => {
                    self.console.success(&report::format_outcome(outcome))?;
                    if self.config.show_timing {
                        self.console
                            .detail(&report::format_duration(outcome.elapsed))?;
                    }
                }
                ReportFormat::Json => {
                    self.console.line(&report::format_outcome_json(outcome)?)?;
                }
            }
        }
        Ok(())
    }
}

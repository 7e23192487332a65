//! Streaming match printer
//!
//! `MatchPrinter` writes each match the moment the walker reports it, one
//! bare path per line. Once the walk returns, `finish` prints the
//! `No results` line if nothing matched.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{MatchSink, WalkReport};

use super::config::OutputConfig;

pub const NO_RESULTS: &str = "No results";

/// Line-per-match printer. Implements `MatchSink` for use with `TreeWalker`.
pub struct MatchPrinter<W: WriteColor> {
    out: W,
}

impl MatchPrinter<StandardStream> {
    pub fn stdout(config: &OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> MatchPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Close out a completed walk.
    pub fn finish(&mut self, report: &WalkReport) -> io::Result<()> {
        if report.matches.is_empty() {
            writeln!(self.out, "{}", NO_RESULTS)?;
        }
        self.out.flush()
    }
}

impl<W: WriteColor> MatchSink for MatchPrinter<W> {
    fn report_match(&mut self, path: &Path) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.out, "{}", path.display())?;
        self.out.reset()?;
        writeln!(self.out)?;
        // Keep output incremental when piped
        self.out.flush()
    }
}

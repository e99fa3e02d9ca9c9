//! Per-file check results and their rendering.

use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};

use abnf_core::{Production, Recognizer};
use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::CheckConfig;

/// 1-based line and byte column of an offset in a grammar file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Locate `offset` in `src`. Lines are counted by LF so bare-LF files
    /// still get useful positions.
    pub fn of(src: &[u8], offset: usize) -> Self {
        let before = &src[..offset.min(src.len())];
        let line = memchr::memchr_iter(b'\n', before).count() + 1;
        let line_start = memchr::memrchr(b'\n', before).map_or(0, |nl| nl + 1);
        Location {
            line,
            column: before.len() - line_start + 1,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Outcome of running one production over one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    pub path: PathBuf,
    pub production: Production,
    /// Bytes matched from offset 0.
    pub recognized: usize,
    /// File length.
    pub total: usize,
    /// Where recognition stopped, if bytes remain.
    pub stopped_at: Option<Location>,
    strict: bool,
}

impl CheckReport {
    /// Recognize `src` as configured and record how far it got.
    pub fn check(path: &Path, src: &[u8], config: CheckConfig) -> Self {
        let recognizer = Recognizer::new(src).with_dialect(config.dialect);
        let recognized = config.production.recognize(&recognizer, 0);
        tracing::debug!(
            path = %path.display(),
            production = %config.production,
            recognized,
            total = recognizer.end(),
            "checked grammar"
        );

        CheckReport {
            path: path.to_path_buf(),
            production: config.production,
            recognized,
            total: recognizer.end(),
            stopped_at: (recognizer.remaining(recognized) > 0)
                .then(|| Location::of(recognizer.src(), recognized)),
            strict: config.strict,
        }
    }

    /// Whether the whole file was recognized.
    pub fn is_complete(&self) -> bool {
        self.recognized == self.total
    }

    /// Success means any match, or in strict mode a complete one.
    pub fn is_success(&self) -> bool {
        if self.strict {
            self.is_complete()
        } else {
            self.recognized > 0
        }
    }

    /// Render a diagnostic pointing at the first unrecognized byte.
    ///
    /// Returns `None` for successful checks and for files that are not
    /// valid UTF-8, which cannot be shown as source text.
    pub fn render_diagnostic(&self, src: &[u8], color: bool) -> Option<String> {
        if self.is_success() {
            return None;
        }
        let text = std::str::from_utf8(src).ok()?;
        let id = self.path.display().to_string();
        let span = char_span(text, self.recognized);

        let message = if self.recognized == 0 {
            format!("input does not start with a valid {}", self.production)
        } else {
            format!(
                "{} covers only {} of {} bytes",
                self.production, self.recognized, self.total
            )
        };

        let mut out = Vec::new();
        Report::build(ReportKind::Error, id.clone(), span.start)
            .with_config(Config::default().with_color(color))
            .with_message(message)
            .with_label(
                Label::new((id.clone(), span))
                    .with_message("recognition stops here")
                    .with_color(Color::Red),
            )
            .finish()
            .write((id, Source::from(text.to_owned())), &mut out)
            .ok()?;
        String::from_utf8(out).ok()
    }
}

/// The one-character span starting at byte `offset`, in the char units
/// the renderer counts in.
fn char_span(text: &str, offset: usize) -> Range<usize> {
    let start = text.char_indices().take_while(|&(i, _)| i < offset).count();
    start..start + 1
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: recognized {} of {} bytes",
            self.path.display(),
            self.recognized,
            self.total
        )?;
        if let Some(location) = self.stopped_at {
            write!(f, ", stopped at {location}")?;
        }
        Ok(())
    }
}

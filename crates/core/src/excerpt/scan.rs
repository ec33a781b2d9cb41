//! Line-scan state machine for automatic separator placement.
//!
//! The scanner walks the lines of a document once. Content lines are counted
//! until the threshold is reached, at which point the scanner is armed and
//! waits for the next paragraph boundary instead of splitting a paragraph.

/// Front-matter delimiter line.
const DELIMITER: &str = "---";

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A `---` line.
    Delimiter,
    /// Empty or whitespace-only.
    Blank,
    /// Starts with `#`.
    Heading,
    /// Starts with `<!--`, which includes separators and other directives.
    Comment,
    /// Anything else; counts toward the threshold.
    Content,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed == DELIMITER {
            Self::Delimiter
        } else if trimmed.is_empty() {
            Self::Blank
        } else if trimmed.starts_with('#') {
            Self::Heading
        } else if trimmed.starts_with("<!--") {
            Self::Comment
        } else {
            Self::Content
        }
    }
}

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Inside a `---` block; lines are copied and never counted.
    FrontMatter,
    /// Counting content lines.
    Scanning,
    /// Threshold reached; waiting for a paragraph boundary.
    Armed,
    /// Boundary found. Terminal.
    Done,
}

/// Line-scan state machine over a borrowed line sequence.
#[derive(Debug)]
pub struct Scanner<'a> {
    lines: &'a [&'a str],
    max_lines: usize,
    state: ScanState,
    content_lines: usize,
    boundary: Option<usize>,
    /// Index of the last `---` line, used to tell an opening delimiter from
    /// an unterminated one.
    last_delimiter: Option<usize>,
}

impl<'a> Scanner<'a> {
    pub fn new(lines: &'a [&'a str], max_lines: usize) -> Self {
        let last_delimiter =
            lines.iter().rposition(|l| LineKind::of(l) == LineKind::Delimiter);
        Self {
            lines,
            max_lines,
            state: ScanState::Scanning,
            content_lines: 0,
            boundary: None,
            last_delimiter,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Content lines counted so far.
    pub fn content_lines(&self) -> usize {
        self.content_lines
    }

    /// Index of the line after which the separator belongs, once `Done`.
    pub fn boundary(&self) -> Option<usize> {
        self.boundary
    }

    /// Feed the line at `index` and return the resulting state.
    ///
    /// Lines must be fed in order. Feeding after `Done` is a no-op.
    pub fn step(&mut self, index: usize) -> ScanState {
        let Some(line) = self.lines.get(index) else {
            return self.state;
        };
        let kind = LineKind::of(line);

        self.state = match (self.state, kind) {
            (ScanState::Done, _) => ScanState::Done,
            (ScanState::FrontMatter, LineKind::Delimiter) => self.body_state(),
            (ScanState::FrontMatter, _) => ScanState::FrontMatter,
            (_, LineKind::Delimiter) => {
                if self.last_delimiter.is_some_and(|last| last > index) {
                    ScanState::FrontMatter
                } else {
                    // unterminated: neither counted nor a boundary
                    self.state
                }
            }
            (_, kind) => self.scan_body_line(index, kind),
        };
        self.state
    }

    /// Feed every line until `Done` or the end of the document.
    pub fn run(&mut self) -> ScanState {
        for index in 0..self.lines.len() {
            if self.step(index) == ScanState::Done {
                break;
            }
        }
        self.state
    }

    fn scan_body_line(&mut self, index: usize, kind: LineKind) -> ScanState {
        if kind == LineKind::Content {
            self.content_lines += 1;
        }

        if self.body_state() == ScanState::Armed && self.is_boundary(index, kind) {
            self.boundary = Some(index);
            return ScanState::Done;
        }
        self.body_state()
    }

    fn body_state(&self) -> ScanState {
        if self.content_lines >= self.max_lines {
            ScanState::Armed
        } else {
            ScanState::Scanning
        }
    }

    fn is_boundary(&self, index: usize, kind: LineKind) -> bool {
        kind == LineKind::Blank
            || self.lines.get(index + 1).is_none_or(|next| next.trim().is_empty())
    }
}

//! Separator insertion.

use super::eligibility::is_blog_post;
use super::options::{ExcerptOptions, OptionsError};
use super::scan::{ScanState, Scanner};
use super::types::{ExcerptAction, ExcerptOutcome};
use crate::frontmatter;

/// Logs a placement decision at `info` when verbose, `debug` otherwise.
macro_rules! decision {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            tracing::info!($($arg)+);
        } else {
            tracing::debug!($($arg)+);
        }
    };
}

/// Inserts a read-more separator into blog-post markdown.
///
/// The inserter holds only validated options, so one instance can serve any
/// number of documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct ExcerptInserter {
    options: ExcerptOptions,
}

impl ExcerptInserter {
    /// Build an inserter, validating the options up front.
    ///
    /// # Errors
    ///
    /// Returns an [`OptionsError`] for a zero `max_lines` or a blank
    /// separator.
    pub fn new(options: ExcerptOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &ExcerptOptions {
        &self.options
    }

    /// Process a page identified by its source path (relative to the docs
    /// directory).
    ///
    /// Eligibility is derived from the path and the explicit excerpt from the
    /// `excerpt` front-matter field.
    pub fn process_page(&self, src_path: &str, markdown: &str) -> ExcerptOutcome {
        let eligible = is_blog_post(src_path);
        decision!(self.options.verbose, "Page src_path: {}, is_blog_post: {}", src_path, eligible);
        if !eligible {
            decision!(self.options.verbose, "Skipping non-blog page: {}", src_path);
            return ExcerptOutcome::unchanged(markdown, ExcerptAction::NotEligible);
        }

        let excerpt = if self.options.use_frontmatter_excerpt {
            frontmatter::excerpt_field(markdown)
        } else {
            None
        };

        let outcome = self.process(markdown, true, excerpt.as_deref());
        decision!(self.options.verbose, "{}: {}", src_path, outcome.action);
        outcome
    }

    /// Process raw markdown.
    ///
    /// `excerpt_override` is an explicit excerpt supplied by the caller; it
    /// is used only when `use_frontmatter_excerpt` is set and it is not
    /// blank. An override that itself contains the separator is ignored, so
    /// the output never carries the separator twice.
    pub fn process(
        &self,
        markdown: &str,
        is_eligible: bool,
        excerpt_override: Option<&str>,
    ) -> ExcerptOutcome {
        if !is_eligible {
            return ExcerptOutcome::unchanged(markdown, ExcerptAction::NotEligible);
        }

        if !self.options.enabled {
            return ExcerptOutcome::unchanged(markdown, ExcerptAction::Disabled);
        }

        if markdown.contains(&self.options.separator) {
            decision!(self.options.verbose, "Separator already present; leaving document untouched");
            return ExcerptOutcome::unchanged(markdown, ExcerptAction::SeparatorPresent);
        }

        let excerpt_override = excerpt_override.filter(|e| !e.trim().is_empty());
        if excerpt_override.is_some_and(|e| e.contains(&self.options.separator)) {
            tracing::warn!("Explicit excerpt contains the separator; ignoring it");
        }

        if self.options.use_frontmatter_excerpt
            && let Some(excerpt) =
                excerpt_override.filter(|e| !e.contains(&self.options.separator))
        {
            decision!(self.options.verbose, "Inserting explicit excerpt above separator");
            return ExcerptOutcome {
                content: self.insert_explicit_excerpt(markdown, excerpt),
                action: ExcerptAction::FrontmatterExcerpt,
            };
        }

        if !self.options.auto_inject_separator {
            decision!(self.options.verbose, "No excerpt or separator injected");
            return ExcerptOutcome::unchanged(markdown, ExcerptAction::AutoInjectDisabled);
        }

        self.insert_separator(markdown)
    }

    /// Front matter, blank, excerpt, blank, separator, blank, original body.
    ///
    /// Without front matter the block is empty and the output starts with
    /// the blank line.
    fn insert_explicit_excerpt(&self, markdown: &str, excerpt: &str) -> String {
        let parts = frontmatter::split(markdown);
        if !parts.has_front_matter() && markdown.trim_start().starts_with("---") {
            decision!(
                self.options.verbose,
                "No closing --- found for front matter; treating as no front matter"
            );
        }

        let excerpt = excerpt.trim();
        let mut out: Vec<&str> = Vec::with_capacity(parts.front_matter.len() + parts.body.len() + 6);
        out.extend(&parts.front_matter);
        out.extend(["", excerpt, "", self.options.separator.as_str(), ""]);
        out.extend(&parts.body);
        out.join("\n")
    }

    /// Place the separator at the first paragraph boundary after
    /// `max_lines` content lines, or at the end of the document.
    ///
    /// At the end of the document, trailing blank and whitespace-only lines
    /// are dropped and exactly one blank line precedes the separator (none
    /// when the body is empty). A trailing newline in the input is kept
    /// after the separator.
    fn insert_separator(&self, markdown: &str) -> ExcerptOutcome {
        let separator = self.options.separator.as_str();
        let lines: Vec<&str> = markdown.split('\n').collect();

        let mut scanner = Scanner::new(&lines, self.options.max_lines);
        let state = scanner.run();
        let content_lines = scanner.content_lines();

        if state == ScanState::Done
            && let Some(index) = scanner.boundary()
        {
            let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 2);
            out.extend(&lines[..=index]);
            if !lines[index].trim().is_empty() {
                out.push("");
            }
            out.push(separator);
            out.extend(&lines[index + 1..]);

            decision!(
                self.options.verbose,
                "Inserted separator after {} content lines at line {}",
                content_lines,
                index + 1
            );
            return ExcerptOutcome {
                content: out.join("\n"),
                action: ExcerptAction::InsertedAtBoundary { line: index + 1, content_lines },
            };
        }

        let front_matter_len = frontmatter::split(markdown).front_matter.len();
        let mut out = lines;
        while out.len() > front_matter_len && out.last().is_some_and(|l| l.trim().is_empty()) {
            out.pop();
        }
        if out.len() > front_matter_len {
            out.push("");
        }
        out.push(separator);
        if markdown.ends_with('\n') {
            out.push("");
        }

        decision!(self.options.verbose, "Inserted separator at end of content");
        ExcerptOutcome {
            content: out.join("\n"),
            action: ExcerptAction::AppendedAtEnd { content_lines },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SEP: &str = "<!-- more -->";

    fn inserter(max_lines: usize) -> ExcerptInserter {
        ExcerptInserter::new(ExcerptOptions { max_lines, ..Default::default() }).unwrap()
    }

    #[test]
    fn new_rejects_invalid_options() {
        let err = ExcerptInserter::new(ExcerptOptions { max_lines: 0, ..Default::default() })
            .unwrap_err();
        assert_eq!(err, OptionsError::InvalidMaxLines(0));

        let err = ExcerptInserter::new(ExcerptOptions {
            separator: String::new(),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, OptionsError::EmptySeparator);
    }

    #[test]
    fn inserts_at_paragraph_boundary() {
        let input = "---\ntitle: x\n---\nHello\n\nWorld\n";
        let out = inserter(1).process(input, true, None);
        assert_eq!(out.content, "---\ntitle: x\n---\nHello\n\n<!-- more -->\n\nWorld\n");
        assert_eq!(out.action, ExcerptAction::InsertedAtBoundary { line: 4, content_lines: 1 });
    }

    #[test]
    fn waits_for_end_of_paragraph() {
        let input = "one\ntwo\nthree\n\nfour\n";
        let out = inserter(1).process(input, true, None);
        assert_eq!(out.content, "one\ntwo\nthree\n\n<!-- more -->\n\nfour\n");
    }

    #[test]
    fn heading_before_blank_is_a_boundary() {
        let input = "# T\none\n## Sub\n\nfour";
        let out = inserter(1).process(input, true, None);
        assert_eq!(out.content, "# T\none\n## Sub\n\n<!-- more -->\n\nfour");
        assert_eq!(out.action, ExcerptAction::InsertedAtBoundary { line: 3, content_lines: 1 });
    }

    #[test]
    fn blank_boundary_line_gets_no_extra_blank() {
        // a stray `---` is never a boundary, so the blank line after it is
        let input = "one\n---\n\nfour";
        let out = inserter(1).process(input, true, None);
        assert_eq!(out.content, "one\n---\n\n<!-- more -->\nfour");
        assert_eq!(out.action, ExcerptAction::InsertedAtBoundary { line: 3, content_lines: 1 });
    }

    #[test]
    fn short_document_gets_separator_at_end() {
        let out = inserter(10).process("Hello\nWorld\n", true, None);
        assert_eq!(out.content, "Hello\nWorld\n\n<!-- more -->\n");
        assert_eq!(out.action, ExcerptAction::AppendedAtEnd { content_lines: 2 });

        let out = inserter(10).process("Hello\nWorld", true, None);
        assert_eq!(out.content, "Hello\nWorld\n\n<!-- more -->");
    }

    #[test]
    fn tail_collapses_trailing_blank_lines() {
        let out = inserter(10).process("Hello\n\n\n\n", true, None);
        assert_eq!(out.content, "Hello\n\n<!-- more -->\n");
    }

    #[test]
    fn tail_drops_whitespace_only_lines() {
        let out = inserter(10).process("Hello\n  \n", true, None);
        assert_eq!(out.content, "Hello\n\n<!-- more -->\n");

        let out = inserter(10).process("Hello\n\t", true, None);
        assert_eq!(out.content, "Hello\n\n<!-- more -->");
    }

    #[test]
    fn excerpt_containing_separator_is_ignored() {
        let out = inserter(10).process("Body\n", true, Some("See <!-- more --> here"));
        assert_eq!(out.content, "Body\n\n<!-- more -->\n");
        assert_eq!(out.action, ExcerptAction::AppendedAtEnd { content_lines: 1 });
        assert_eq!(out.content.matches(SEP).count(), 1);
    }

    #[test]
    fn tail_with_empty_body() {
        let out = inserter(10).process("---\ntitle: x\n---\n", true, None);
        assert_eq!(out.content, "---\ntitle: x\n---\n<!-- more -->\n");

        let out = inserter(10).process("", true, None);
        assert_eq!(out.content, SEP);
    }

    #[test]
    fn explicit_excerpt_with_front_matter() {
        let input = "---\ntitle: x\n---\nBody text\n";
        let out = inserter(10).process(input, true, Some("Custom summary."));
        assert_eq!(
            out.content,
            "---\ntitle: x\n---\n\nCustom summary.\n\n<!-- more -->\n\nBody text\n"
        );
        assert_eq!(out.action, ExcerptAction::FrontmatterExcerpt);
    }

    #[test]
    fn explicit_excerpt_without_front_matter() {
        let out = inserter(10).process("Body text", true, Some("Summary"));
        assert_eq!(out.content, "\nSummary\n\n<!-- more -->\n\nBody text");
    }

    #[test]
    fn blank_excerpt_falls_back_to_automatic() {
        let out = inserter(10).process("Body", true, Some("   "));
        assert_eq!(out.action, ExcerptAction::AppendedAtEnd { content_lines: 1 });
    }

    #[test]
    fn excerpt_ignored_when_disabled_in_options() {
        let inserter = ExcerptInserter::new(ExcerptOptions {
            use_frontmatter_excerpt: false,
            ..Default::default()
        })
        .unwrap();
        let out = inserter.process("Body", true, Some("Summary"));
        assert_eq!(out.content, "Body\n\n<!-- more -->");
    }

    #[rstest]
    #[case(false, true, "x", ExcerptAction::NotEligible)]
    #[case(true, false, "x", ExcerptAction::Disabled)]
    #[case(true, true, "a\n<!-- more -->\nb", ExcerptAction::SeparatorPresent)]
    #[case(false, false, "a <!-- more --> b", ExcerptAction::NotEligible)]
    fn guards_leave_input_unchanged(
        #[case] eligible: bool,
        #[case] enabled: bool,
        #[case] input: &str,
        #[case] expected: ExcerptAction,
    ) {
        let inserter =
            ExcerptInserter::new(ExcerptOptions { enabled, ..Default::default() }).unwrap();
        let out = inserter.process(input, eligible, Some("Summary"));
        assert_eq!(out.content, input);
        assert_eq!(out.action, expected);
        assert!(!out.changed());
    }

    #[test]
    fn auto_inject_off_leaves_input_unchanged() {
        let inserter = ExcerptInserter::new(ExcerptOptions {
            auto_inject_separator: false,
            ..Default::default()
        })
        .unwrap();
        let out = inserter.process("Body\n", true, None);
        assert_eq!(out.content, "Body\n");
        assert_eq!(out.action, ExcerptAction::AutoInjectDisabled);

        let out = inserter.process("Body\n", true, Some("Summary"));
        assert_eq!(out.action, ExcerptAction::FrontmatterExcerpt);
    }

    #[test]
    fn custom_separator() {
        let inserter = ExcerptInserter::new(ExcerptOptions {
            max_lines: 1,
            separator: "<!-- excerpt -->".into(),
            ..Default::default()
        })
        .unwrap();
        let out = inserter.process("a\n\nb <!-- more -->", true, None);
        assert_eq!(out.content, "a\n\n<!-- excerpt -->\n\nb <!-- more -->");
    }

    #[test]
    fn process_page_reads_front_matter_excerpt() {
        let input = "---\ntitle: x\nexcerpt: From meta.\n---\nBody\n";
        let out = inserter(10).process_page("blog/posts/x.md", input);
        assert_eq!(
            out.content,
            "---\ntitle: x\nexcerpt: From meta.\n---\n\nFrom meta.\n\n<!-- more -->\n\nBody\n"
        );
    }

    #[test]
    fn process_page_skips_non_posts() {
        let input = "---\nexcerpt: From meta.\n---\nBody\n";
        let out = inserter(10).process_page("about.md", input);
        assert_eq!(out.content, input);
        assert_eq!(out.action, ExcerptAction::NotEligible);
    }
}

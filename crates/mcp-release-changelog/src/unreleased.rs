//! Line-oriented handling of the `## [Unreleased]` section
//!
//! Both operations walk the document once with `split_inclusive('\n')`, so
//! every copied line keeps its original terminator (`\n`, `\r\n` or none on
//! the last line).
//!
//! Locating the section and rewriting its heading intentionally match
//! differently: extraction accepts any `## ` heading that mentions
//! `[Unreleased]`, while rewriting only accepts a line that is exactly
//! `## [Unreleased]`.

use tracing::{debug, instrument};

/// Prefix that introduces a section heading
pub const HEADING_PREFIX: &str = "## ";

/// Marker identifying the unreleased section
pub const UNRELEASED_MARKER: &str = "[Unreleased]";

/// Exact heading line the rewrite anchors on
pub const UNRELEASED_HEADING: &str = "## [Unreleased]";

/// Whether `line` opens a section, ignoring surrounding whitespace
fn is_heading(line: &str) -> bool {
    line.trim().starts_with(HEADING_PREFIX)
}

/// Whether `line` opens the unreleased section (loose match)
fn is_unreleased_heading(line: &str) -> bool {
    is_heading(line) && line.contains(UNRELEASED_MARKER)
}

/// Split a line into its content and terminator
fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Text of the unreleased section, heading excluded.
///
/// Returns every line after the first heading containing `[Unreleased]` up to
/// the next `## ` heading or end of input, verbatim. `None` when no such
/// heading exists.
#[instrument(skip(content), fields(len = content.len()))]
pub fn extract_unreleased(content: &str) -> Option<String> {
    let mut lines = content.split_inclusive('\n');
    lines.by_ref().find(|line| is_unreleased_heading(line))?;

    let section: String = lines.take_while(|line| !is_heading(line)).collect();
    debug!(bytes = section.len(), "extracted unreleased section");
    Some(section)
}

/// Insert a blank line and `new_heading` after the exact unreleased heading.
///
/// Only the first line equal to `## [Unreleased]` (terminator aside) is
/// considered; everything else is copied unchanged. `None` when no line
/// matches exactly.
#[instrument(skip(content), fields(len = content.len()))]
pub fn insert_release_heading(content: &str, new_heading: &str) -> Option<String> {
    let mut output = String::with_capacity(content.len() + new_heading.len() + 4);
    let mut inserted = false;

    for line in content.split_inclusive('\n') {
        output.push_str(line);

        if inserted {
            continue;
        }

        let (body, terminator) = split_terminator(line);
        if body != UNRELEASED_HEADING {
            continue;
        }

        let eol = if terminator.is_empty() {
            output.push('\n');
            "\n"
        } else {
            terminator
        };
        output.push_str(eol);
        output.push_str(new_heading);
        output.push_str(eol);
        inserted = true;
    }

    debug!(inserted, "rewrote unreleased heading");
    inserted.then_some(output)
}

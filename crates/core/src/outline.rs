//! The outline parser.
//!
//! An outline document is a loosely indented list of labeled shell commands:
//!
//! ```text
//! #indent=2
//! Build: make all
//! Tools:
//!   Lint: golint ./...
//!   Watch: make watch \
//! Shell
//! ```
//!
//! Each content line becomes an [`Entry`]; indentation depth decides which
//! open branch it attaches to. Structural anomalies never fail the parse:
//! a malformed directive keeps the previous indent width and an indentation
//! over-jump attaches to the deepest open branch.

use log::warn;

use crate::entries::Entry;

/// Indent width in columns used until the first `#indent=` directive.
pub const DEFAULT_INDENT_UNIT: usize = 4;

const COMMENT_MARKER: char = '#';
const INDENT_DIRECTIVE_PREFIX: &str = "#indent=";
/// Trailing marker requesting "return to the menu after running".
const STAY_OPEN_MARKER: char = '\\';
const BRANCH_MARKER: char = ':';

/// A fully parsed outline document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    pub root: Entry,
    /// The indent unit active at the end of the scan, mostly of interest to
    /// diagnostics and tests.
    pub indent_unit: usize,
}

/// Parses the full text of an outline document into an entry tree.
///
/// The scan is a single top-to-bottom pass and cannot fail: every line-level
/// anomaly degrades to the nearest sensible interpretation instead.
#[must_use]
pub fn parse_outline(text: &str) -> Outline {
    let mut indent_unit = DEFAULT_INDENT_UNIT;

    // stack[d] is the entry currently open at depth d, seeded with the root.
    // Entries are attached to their parent when they close (pop), which
    // preserves document order.
    let mut stack: Vec<Entry> = vec![Entry::root()];

    for line in text.lines() {
        let trimmed = line.trim();

        if let Some(value) = trimmed.strip_prefix(INDENT_DIRECTIVE_PREFIX) {
            match value.trim().parse::<usize>() {
                Ok(width) if width > 0 => indent_unit = width,
                _ => warn!("Ignoring malformed indent directive: `{trimmed}`"),
            }
            continue;
        }

        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            continue;
        }

        let Some(entry) = parse_content_line(trimmed) else {
            continue;
        };

        // An indentation jump past the deepest open branch attaches there
        // instead of failing.
        let depth = indent_depth(line, indent_unit).min(stack.len() - 1);
        close_down_to(&mut stack, depth + 1);
        stack.push(entry);
    }

    close_down_to(&mut stack, 1);
    let root = stack.pop().unwrap_or_else(Entry::root);

    Outline { root, indent_unit }
}

/// Pops open entries until the stack holds `len`, attaching each to its
/// parent as it closes.
fn close_down_to(stack: &mut Vec<Entry>, len: usize) {
    while stack.len() > len {
        if let Some(finished) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.children.push(finished);
            }
        }
    }
}

/// Leading-whitespace width in columns divided by the indent unit.
///
/// Spaces count one column, tabs count a full indent unit. Mixing the two is
/// allowed and resolves deterministically.
fn indent_depth(line: &str, indent_unit: usize) -> usize {
    let mut columns = 0;
    for character in line.chars() {
        match character {
            ' ' => columns += 1,
            '\t' => columns += indent_unit,
            _ => break,
        }
    }
    columns / indent_unit
}

/// Converts one trimmed content line into an entry.
///
/// Returns `None` for lines that yield no usable label, which are skipped
/// like any other tolerated anomaly.
fn parse_content_line(trimmed: &str) -> Option<Entry> {
    let mut exit_after_run = true;
    let mut text = trimmed;

    if let Some(stripped) = text.strip_suffix(STAY_OPEN_MARKER) {
        exit_after_run = false;
        text = stripped.trim_end();
    }

    if let Some(header) = text.strip_suffix(BRANCH_MARKER) {
        let label = header.trim_end();
        if label.is_empty() {
            return None;
        }
        return Some(Entry::branch(label));
    }

    let (label, command) = match text.split_once(BRANCH_MARKER) {
        // A bare command doubles as its own label.
        None => (text, text),
        Some((left, right)) => {
            let label = left.trim();
            let command = right.trim();
            if label.is_empty() {
                // Nothing before the colon: fall back to the command text.
                (command, command)
            } else {
                (label, command)
            }
        }
    };

    if label.is_empty() {
        return None;
    }

    Some(Entry::leaf(label, command, exit_after_run))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(entry: &Entry) -> Vec<&str> {
        entry.children.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn labeled_command_line_parses_to_a_leaf() {
        let outline = parse_outline("Build: make all");

        assert_eq!(outline.root.children.len(), 1);
        let entry = &outline.root.children[0];
        assert_eq!(entry.label, "Build");
        assert_eq!(entry.command.as_deref(), Some("make all"));
        assert!(entry.exit_after_run);
        assert!(entry.is_leaf());
    }

    #[test]
    fn bare_command_is_its_own_label() {
        let outline = parse_outline("make test");

        let entry = &outline.root.children[0];
        assert_eq!(entry.label, "make test");
        assert_eq!(entry.command.as_deref(), Some("make test"));
    }

    #[test]
    fn trailing_colon_denotes_a_branch_header() {
        let outline = parse_outline("Tools:\n    Lint: golint ./...");

        let tools = &outline.root.children[0];
        assert_eq!(tools.label, "Tools");
        assert!(tools.command.is_none());
        assert_eq!(labels(tools), vec!["Lint"]);
        assert_eq!(tools.children[0].command.as_deref(), Some("golint ./..."));
    }

    #[test]
    fn root_has_the_sentinel_label() {
        let outline = parse_outline("Build: make");
        assert_eq!(outline.root.label, "Main Menu");
    }

    #[test]
    fn blank_and_comment_lines_produce_no_entries() {
        let outline = parse_outline("# a comment\n\nBuild: make\n   \n# another");

        assert_eq!(labels(&outline.root), vec!["Build"]);
    }

    #[test]
    fn indent_directive_sets_the_unit_for_subsequent_lines() {
        let outline = parse_outline("#indent=2\nTools:\n  Lint: golint");

        assert_eq!(outline.indent_unit, 2);
        let tools = &outline.root.children[0];
        assert_eq!(labels(tools), vec!["Lint"]);
    }

    #[test]
    fn malformed_directive_keeps_the_previous_width() {
        let text = "#indent=banana\n#indent=0\n#indent=-3\nTools:\n    Lint: golint";
        let outline = parse_outline(text);

        assert_eq!(outline.indent_unit, DEFAULT_INDENT_UNIT);
        assert_eq!(labels(&outline.root.children[0]), vec!["Lint"]);
    }

    #[test]
    fn latest_directive_wins_from_that_point_forward() {
        let text = "#indent=4\nTools:\n    Lint: golint\n#indent=2\n  Format: gofmt";
        let outline = parse_outline(text);

        assert_eq!(outline.indent_unit, 2);
        let tools = &outline.root.children[0];
        assert_eq!(labels(tools), vec!["Lint", "Format"]);
    }

    #[test]
    fn directive_value_may_carry_surrounding_whitespace() {
        let outline = parse_outline("#indent= 2\nTools:\n  Lint: golint");
        assert_eq!(outline.indent_unit, 2);
    }

    #[test]
    fn stay_open_marker_flips_exit_after_run() {
        let outline = parse_outline("Watch: make watch \\");

        let entry = &outline.root.children[0];
        assert_eq!(entry.command.as_deref(), Some("make watch"));
        assert!(!entry.exit_after_run);
    }

    #[test]
    fn plain_commands_exit_after_running_by_default() {
        let outline = parse_outline("Build: make");
        assert!(outline.root.children[0].exit_after_run);
    }

    #[test]
    fn a_tab_counts_as_one_indent_unit() {
        let outline = parse_outline("Tools:\n\tLint: golint");

        assert_eq!(labels(&outline.root.children[0]), vec!["Lint"]);
    }

    #[test]
    fn mixed_tabs_and_spaces_resolve_to_columns() {
        // Tab (4 columns) + 4 spaces = 8 columns = depth 2 under unit 4.
        let text = "Outer:\n    Inner:\n\t    Deep: run";
        let outline = parse_outline(text);

        let outer = &outline.root.children[0];
        let inner = &outer.children[0];
        assert_eq!(labels(inner), vec!["Deep"]);
    }

    #[test]
    fn over_jump_attaches_to_the_deepest_open_branch() {
        // Depth jumps from 0 straight to 2; the entry still lands under
        // "Tools" rather than failing the parse.
        let text = "Tools:\n        Lint: golint";
        let outline = parse_outline(text);

        let tools = &outline.root.children[0];
        assert_eq!(labels(tools), vec!["Lint"]);
    }

    #[test]
    fn shallow_indent_is_tolerated_as_top_level() {
        // Two spaces under unit 4 is depth 0: a sibling, not a child.
        let text = "Tools:\n  Lint: golint";
        let outline = parse_outline(text);

        assert_eq!(labels(&outline.root), vec!["Tools", "Lint"]);
    }

    #[test]
    fn dedent_closes_open_branches() {
        let text = "Tools:\n    Lint: golint\nBuild: make";
        let outline = parse_outline(text);

        assert_eq!(labels(&outline.root), vec!["Tools", "Build"]);
        assert_eq!(labels(&outline.root.children[0]), vec!["Lint"]);
    }

    #[test]
    fn branch_wins_when_a_command_line_gains_children() {
        // "Tools: ls" reads like a leaf, but the indented child turns it
        // into a branch; the trailing command text is kept but inert.
        let text = "Tools: ls\n    Lint: golint";
        let outline = parse_outline(text);

        let tools = &outline.root.children[0];
        assert!(tools.is_branch());
        assert_eq!(tools.command.as_deref(), Some("ls"));
        assert_eq!(labels(tools), vec!["Lint"]);
    }

    #[test]
    fn empty_label_falls_back_to_the_command_text() {
        let outline = parse_outline(": make all");

        let entry = &outline.root.children[0];
        assert_eq!(entry.label, "make all");
        assert_eq!(entry.command.as_deref(), Some("make all"));
    }

    #[test]
    fn a_lone_colon_produces_nothing() {
        let outline = parse_outline(":");
        assert!(outline.root.children.is_empty());
    }

    #[test]
    fn deep_nesting_keeps_every_entry_reachable_exactly_once() {
        let text = "\
A:
    B:
        C: run c
    D: run d
E: run e";
        let outline = parse_outline(text);

        assert_eq!(labels(&outline.root), vec!["A", "E"]);
        let a = &outline.root.children[0];
        assert_eq!(labels(a), vec!["B", "D"]);
        assert_eq!(labels(&a.children[0]), vec!["C"]);

        // Five entries total below the root, each appearing once.
        fn count(entry: &Entry) -> usize {
            1 + entry.children.iter().map(count).sum::<usize>()
        }
        assert_eq!(count(&outline.root), 6);
    }

    #[test]
    fn branch_header_may_carry_the_stay_open_marker() {
        // The marker is stripped before the colon check; it has no effect
        // on a header line.
        let outline = parse_outline("Tools: \\\n    Lint: golint");

        let tools = &outline.root.children[0];
        assert!(tools.command.is_none());
        assert_eq!(labels(tools), vec!["Lint"]);
    }

    #[test]
    fn label_with_embedded_colon_splits_on_the_first_one() {
        let outline = parse_outline("Serve: python -m http.server --bind 127.0.0.1:8000");

        let entry = &outline.root.children[0];
        assert_eq!(entry.label, "Serve");
        assert_eq!(
            entry.command.as_deref(),
            Some("python -m http.server --bind 127.0.0.1:8000")
        );
    }
}

use std::fmt::{Display, Formatter};

/// Label of the synthetic root entry. The root is never selectable or
/// executable; it only anchors the top menu level.
pub const ROOT_LABEL: &str = "Main Menu";

/// A node in the parsed command tree.
///
/// An entry is a *leaf* when it carries a command and has no children, and
/// a *branch* (submenu) otherwise. An entry that ends up with both a command
/// and children is treated as a branch and its command is never executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub command: Option<String>,
    /// Whether running this entry's command ends the whole session. Plain
    /// commands exit by default; the stay-open marker flips this off.
    pub exit_after_run: bool,
    /// Submenu contents, in document order.
    pub children: Vec<Entry>,
}

impl Entry {
    /// The synthetic root that anchors every parsed outline.
    pub fn root() -> Self {
        Self::branch(ROOT_LABEL)
    }

    pub fn branch(label: &str) -> Self {
        Self {
            label: label.to_string(),
            command: None,
            exit_after_run: true,
            children: Vec::new(),
        }
    }

    pub fn leaf(label: &str, command: &str, exit_after_run: bool) -> Self {
        Self {
            label: label.to_string(),
            command: Some(command.to_string()),
            exit_after_run,
            children: Vec::new(),
        }
    }

    /// An entry is a leaf only when it has a command and no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.command.is_some() && self.children.is_empty()
    }

    /// Children win over a command: anything that is not a leaf navigates.
    #[must_use]
    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }

    /// All leaf entries below this one, depth-first in document order.
    ///
    /// This is the numbering used by `--list` and `--command-number`.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Entry> {
        let mut collected = Vec::new();
        collect_leaves(self, &mut collected);
        collected
    }
}

fn collect_leaves<'a>(entry: &'a Entry, collected: &mut Vec<&'a Entry>) {
    for child in &entry.children {
        if child.is_leaf() {
            collected.push(child);
        } else {
            collect_leaves(child, collected);
        }
    }
}

impl Display for Entry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.label.as_str())
    }
}

use crate::artifacts::objects::commit::Commit;
use colored::Colorize;
use derive_new::new;

const LABEL_WIDTH: usize = 4;

/// How a working-tree file relates to the checked-out snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Restoration {
    /// Working copy hash equals the recorded hash
    Unchanged,
    /// Working copy differs, or the snapshot recorded no hash for it
    Diverged,
    /// File is absent from the working tree
    Missing,
}

impl From<&Restoration> for &str {
    fn from(restoration: &Restoration) -> Self {
        match restoration {
            Restoration::Unchanged => "unchanged:  ",
            Restoration::Diverged => "diverged:   ",
            Restoration::Missing => "missing:    ",
        }
    }
}

impl std::fmt::Display for Restoration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let colored_label = match self {
            Restoration::Unchanged => label.normal(),
            Restoration::Diverged => label.yellow(),
            Restoration::Missing => label.red(),
        };
        write!(f, "{:>width$}{}", "", colored_label, width = LABEL_WIDTH)
    }
}

#[derive(Debug, Clone, new)]
pub struct CheckoutReport {
    pub commit: Commit,
    pub files: Vec<(String, Restoration)>,
}

impl CheckoutReport {
    /// Files whose working copy does not match the snapshot
    pub fn pending(&self) -> impl Iterator<Item = &(String, Restoration)> {
        self.files
            .iter()
            .filter(|(_, restoration)| *restoration != Restoration::Unchanged)
    }
}

use crate::artifacts::objects::object_id::ObjectId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The other branch has no commits; nothing changed
    Empty,
    /// HEAD and the current branch already point at the target
    UpToDate,
    /// HEAD was empty or an ancestor of the target
    FastForward {
        from: Option<ObjectId>,
        to: ObjectId,
    },
    /// HEAD had commits the target does not contain; they are no longer
    /// reachable from the current branch
    Overwrote {
        from: ObjectId,
        to: ObjectId,
        discarded: usize,
    },
}

impl MergeOutcome {
    pub fn target(&self) -> Option<&ObjectId> {
        match self {
            MergeOutcome::Empty | MergeOutcome::UpToDate => None,
            MergeOutcome::FastForward { to, .. } | MergeOutcome::Overwrote { to, .. } => Some(to),
        }
    }
}

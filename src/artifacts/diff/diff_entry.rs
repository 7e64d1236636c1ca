use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// One staged path, with the hash HEAD recorded for it (if any)
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffEntry {
    pub path: String,
    pub hash: ObjectId,
    pub previous: Option<ObjectId>,
}

impl DiffEntry {
    /// True when the staged content differs from what HEAD recorded
    pub fn is_changed(&self) -> bool {
        self.previous.as_ref() != Some(&self.hash)
    }
}

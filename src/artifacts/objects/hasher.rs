use crate::artifacts::objects::object_id::ObjectId;
use sha1::{Digest, Sha1};

/// Hash arbitrary content into an [`ObjectId`].
///
/// Used for file contents on `add` and for commit identity on `commit`.
pub fn hash(content: impl AsRef<[u8]>) -> ObjectId {
    let mut hasher = Sha1::new();
    hasher.update(content.as_ref());

    let digest = hasher.finalize();
    // a SHA-1 digest always renders as 40 hex characters
    ObjectId::try_parse(format!("{digest:x}")).unwrap_or_default()
}

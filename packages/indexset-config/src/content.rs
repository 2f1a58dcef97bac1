//! Content tree collaborator
//!
//! The content system owns the node hierarchy and the user-defined field
//! catalogue; index sets only apply policy to what it reports.

use crate::field::FieldSet;

/// Read access to the content tree needed during indexing
pub trait ContentTree {
    /// Ancestor ids of `node_id`, nearest parent first. Empty for root nodes
    /// and unknown ids.
    fn ancestors(&self, node_id: i32) -> Vec<i32>;

    /// Every user-defined field known to the content system
    fn user_fields(&self) -> FieldSet;
}

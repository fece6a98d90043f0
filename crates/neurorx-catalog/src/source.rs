//! Read-only drug data source.
//!
//! The engine takes drugs by reference; callers that want to swap the
//! curated catalog for a synthetic one in tests or a server go through
//! this trait instead of a global.

use neurorx_common::{ApprovalScope, DrugRecord};

use crate::filter::filter_by_scope;

pub trait DrugSource: Send + Sync {
    /// All records in catalog order.
    fn drugs(&self) -> &[DrugRecord];

    /// Look up one record by its unique id.
    fn get(&self, id: &str) -> Option<&DrugRecord> {
        self.drugs().iter().find(|d| d.id == id)
    }

    /// Records admitted by an approval scope, in catalog order.
    fn by_scope(&self, scope: ApprovalScope) -> Vec<&DrugRecord> {
        filter_by_scope(self.drugs(), scope)
    }
}

impl DrugSource for Vec<DrugRecord> {
    fn drugs(&self) -> &[DrugRecord] {
        self.as_slice()
    }
}

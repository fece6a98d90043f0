//! Approval-scope filtering. Supplies the ranking engine's input set.

use neurorx_common::{ApprovalScope, DrugRecord};

/// Subset `drugs` by approval scope, preserving catalog order.
pub fn filter_by_scope(drugs: &[DrugRecord], scope: ApprovalScope) -> Vec<&DrugRecord> {
    drugs
        .iter()
        .filter(|d| scope.admits(d.is_fda_approved, d.approved_for_oncology))
        .collect()
}

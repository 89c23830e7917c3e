//! Filter engine: independent predicates ANDed over the opportunity list.
//!
//! Every predicate at its default ("all"/empty) means no constraint. Order
//! of evaluation is irrelevant; there are no short-circuit side effects.

use warpline_domain::{Opportunity, OpportunityFilters};

/// True when the opportunity satisfies every active constraint.
pub fn matches(opportunity: &Opportunity, filters: &OpportunityFilters) -> bool {
    matches_search(opportunity, &filters.search)
        && (filters.stages.is_empty() || filters.stages.contains(&opportunity.stage))
        && filters.priority.matches(opportunity.priority)
        && filters.assigned_rep.matches(&opportunity.assigned_rep)
        && filters.brand.matches(&opportunity.brand)
        && filters.source.matches(&opportunity.source)
}

/// Case-insensitive substring match against name, company, contact and
/// brand (OR across fields). An empty query matches everything.
fn matches_search(opportunity: &Opportunity, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [
        opportunity.name.as_str(),
        opportunity.company.as_str(),
        opportunity.contact.as_str(),
        opportunity.brand.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

//! Opportunity store - core business logic

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;
use warpline_domain::{
    FilterUpdate, Opportunity, OpportunityDraft, OpportunityFilters, OpportunityPatch, Priority,
    Result, Stage, StoreConfig, TimelineEntry, TimelineEvent, WarplineError,
};

use super::ports::SnapshotRepository;
use crate::filters;

/// Serialized wholesale as the keyed snapshot payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreState {
    opportunities: Vec<Opportunity>,
    filters: OpportunityFilters,
}

/// Single source of truth for the opportunity list and the active filters.
///
/// All operations are synchronous; the interior lock only makes the store
/// shareable, there is exactly one writer path (these mutation methods).
/// Snapshots are written through the injected repository after every
/// mutation and restored wholesale at construction.
pub struct OpportunityStore {
    state: RwLock<StoreState>,
    repository: Arc<dyn SnapshotRepository>,
    snapshot_key: String,
    autosave: bool,
}

impl std::fmt::Debug for OpportunityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpportunityStore")
            .field("state", &self.state)
            .field("snapshot_key", &self.snapshot_key)
            .field("autosave", &self.autosave)
            .finish_non_exhaustive()
    }
}

impl OpportunityStore {
    /// Create a store, restoring any snapshot previously persisted under the
    /// configured key.
    pub fn new(repository: Arc<dyn SnapshotRepository>, config: &StoreConfig) -> Result<Self> {
        let state = match repository.load_snapshot(&config.snapshot_key)? {
            Some(payload) => serde_json::from_str(&payload).map_err(|e| {
                WarplineError::Database(format!("corrupt store snapshot: {e}"))
            })?,
            None => StoreState::default(),
        };

        Ok(Self {
            state: RwLock::new(state),
            repository,
            snapshot_key: config.snapshot_key.clone(),
            autosave: config.autosave,
        })
    }

    /// Construct a full record from the draft and prepend it to the list.
    ///
    /// Assigns a fresh id when the draft omits one, stamps `updated` with
    /// today and seeds a one-entry "Created" timeline.
    pub fn add_opportunity(&self, draft: OpportunityDraft) -> Result<Opportunity> {
        let today = today();
        let id = draft.id.unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut state = self.state.write();
        if state.opportunities.iter().any(|opp| opp.id == id) {
            return Err(WarplineError::InvalidInput(format!("duplicate opportunity id: {id}")));
        }

        let opportunity = Opportunity {
            id,
            name: draft.name,
            company: draft.company,
            contact: draft.contact,
            brand: draft.brand,
            stage: draft.stage.unwrap_or(Stage::InboundRequest),
            priority: draft.priority.unwrap_or(Priority::Medium),
            updated: today,
            next_step: draft.next_step,
            source: draft.source,
            assigned_rep: draft.assigned_rep,
            timeline: vec![TimelineEntry {
                date: today,
                event: TimelineEvent::Created,
                description: "Opportunity created".to_string(),
            }],
            missing_specs: draft.missing_specs,
            has_samples: draft.has_samples,
            has_quote: draft.has_quote,
            has_po: draft.has_po,
            has_lab_dips: draft.has_lab_dips,
        };

        state.opportunities.insert(0, opportunity.clone());
        self.persist(&state);
        Ok(opportunity)
    }

    /// Merge a field patch into the matching record.
    ///
    /// Appends a timeline entry when the patch changes `next_step`. Unknown
    /// ids are an explicit error rather than a silent no-op. A patch that
    /// changes nothing leaves `updated` alone and writes no snapshot, so
    /// `updated` stays a last-meaningful-change marker.
    pub fn update_opportunity(&self, id: &str, patch: OpportunityPatch) -> Result<Opportunity> {
        let mut state = self.state.write();
        let opportunity = find_mut(&mut state.opportunities, id)?;
        let today = today();
        let mut changed = false;

        if let Some(name) = patch.name {
            changed |= assign(&mut opportunity.name, name);
        }
        if let Some(company) = patch.company {
            changed |= assign(&mut opportunity.company, company);
        }
        if let Some(contact) = patch.contact {
            changed |= assign(&mut opportunity.contact, contact);
        }
        if let Some(brand) = patch.brand {
            changed |= assign(&mut opportunity.brand, brand);
        }
        if let Some(priority) = patch.priority {
            changed |= assign(&mut opportunity.priority, priority);
        }
        if let Some(next_step) = patch.next_step {
            if next_step != opportunity.next_step {
                opportunity.timeline.push(TimelineEntry {
                    date: today,
                    event: TimelineEvent::NextStepUpdated,
                    description: format!("Next step: {next_step}"),
                });
                opportunity.next_step = next_step;
                changed = true;
            }
        }
        if let Some(source) = patch.source {
            changed |= assign(&mut opportunity.source, source);
        }
        if let Some(assigned_rep) = patch.assigned_rep {
            changed |= assign(&mut opportunity.assigned_rep, assigned_rep);
        }
        if let Some(missing_specs) = patch.missing_specs {
            changed |= assign(&mut opportunity.missing_specs, missing_specs);
        }
        if let Some(has_samples) = patch.has_samples {
            changed |= assign(&mut opportunity.has_samples, has_samples);
        }
        if let Some(has_quote) = patch.has_quote {
            changed |= assign(&mut opportunity.has_quote, has_quote);
        }
        if let Some(has_po) = patch.has_po {
            changed |= assign(&mut opportunity.has_po, has_po);
        }
        if let Some(has_lab_dips) = patch.has_lab_dips {
            changed |= assign(&mut opportunity.has_lab_dips, has_lab_dips);
        }

        if !changed {
            return Ok(opportunity.clone());
        }

        opportunity.updated = today;
        let updated = opportunity.clone();
        self.persist(&state);
        Ok(updated)
    }

    /// Move the opportunity to a new pipeline stage.
    ///
    /// A move to the current stage is a no-op: no timeline entry, no
    /// `updated` bump, no snapshot write. Any stage may be assigned from any
    /// other; the pipeline is a label set, not a transition table.
    pub fn move_stage(&self, id: &str, new_stage: Stage) -> Result<Opportunity> {
        let mut state = self.state.write();
        let opportunity = find_mut(&mut state.opportunities, id)?;

        if opportunity.stage == new_stage {
            return Ok(opportunity.clone());
        }

        let old_stage = opportunity.stage;
        let today = today();
        opportunity.stage = new_stage;
        opportunity.updated = today;
        opportunity.timeline.push(TimelineEntry {
            date: today,
            event: TimelineEvent::StageChanged,
            description: format!("{old_stage} → {new_stage}"),
        });

        let moved = opportunity.clone();
        self.persist(&state);
        Ok(moved)
    }

    /// Look up a record by id. Read-only, no side effects.
    pub fn get(&self, id: &str) -> Option<Opportunity> {
        self.state.read().opportunities.iter().find(|opp| opp.id == id).cloned()
    }

    /// Replace the active filter configuration wholesale.
    pub fn set_filters(&self, filters: OpportunityFilters) {
        let mut state = self.state.write();
        state.filters = filters;
        self.persist(&state);
    }

    /// Shallow-merge a partial update into the active filters.
    pub fn update_filters(&self, update: FilterUpdate) {
        let mut state = self.state.write();
        state.filters.apply(update);
        self.persist(&state);
    }

    /// The active filter configuration.
    pub fn filters(&self) -> OpportunityFilters {
        self.state.read().filters.clone()
    }

    /// Opportunities passing every active filter predicate, in list order.
    ///
    /// Recomputed from current state on every call; nothing is cached at
    /// this scale.
    pub fn visible(&self) -> Vec<Opportunity> {
        let state = self.state.read();
        state
            .opportunities
            .iter()
            .filter(|opp| filters::matches(opp, &state.filters))
            .cloned()
            .collect()
    }

    /// Partition of `visible()` into per-stage counts.
    ///
    /// Every stage is present in the map (0 when empty); the values always
    /// sum to `visible().len()`.
    pub fn counts_by_stage(&self) -> BTreeMap<Stage, usize> {
        let mut counts: BTreeMap<Stage, usize> =
            Stage::ALL.into_iter().map(|stage| (stage, 0)).collect();
        for opportunity in self.visible() {
            if let Some(count) = counts.get_mut(&opportunity.stage) {
                *count += 1;
            }
        }
        counts
    }

    /// Number of opportunities in the store, ignoring filters.
    pub fn len(&self) -> usize {
        self.state.read().opportunities.len()
    }

    /// True when the store holds no opportunities.
    pub fn is_empty(&self) -> bool {
        self.state.read().opportunities.is_empty()
    }

    /// Write the current snapshot explicitly.
    pub fn save(&self) -> Result<()> {
        let state = self.state.read();
        let payload = serialize_state(&state)?;
        self.repository.save_snapshot(&self.snapshot_key, &payload)
    }

    /// Best-effort snapshot write after a mutation. Failures are logged and
    /// do not fail the mutation itself.
    fn persist(&self, state: &StoreState) {
        if !self.autosave {
            return;
        }
        let result = serialize_state(state)
            .and_then(|payload| self.repository.save_snapshot(&self.snapshot_key, &payload));
        if let Err(err) = result {
            error!(error = %err, key = %self.snapshot_key, "failed to persist store snapshot");
        }
    }
}

fn serialize_state(state: &StoreState) -> Result<String> {
    serde_json::to_string(state)
        .map_err(|e| WarplineError::Internal(format!("failed to serialize store snapshot: {e}")))
}

/// Overwrite `field` with `value`, reporting whether it actually changed.
fn assign<T: PartialEq>(field: &mut T, value: T) -> bool {
    if *field == value {
        return false;
    }
    *field = value;
    true
}

fn find_mut<'a>(opportunities: &'a mut [Opportunity], id: &str) -> Result<&'a mut Opportunity> {
    opportunities
        .iter_mut()
        .find(|opp| opp.id == id)
        .ok_or_else(|| WarplineError::NotFound(format!("opportunity {id}")))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

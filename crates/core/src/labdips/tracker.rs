//! Lab dip tracker - core business logic
//!
//! Exactly one ownership model: a tracker instance injected where it is
//! needed. There is no module-level global and no second copy of this
//! state anywhere else.

use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;
use warpline_domain::{LabDip, LabDipStatus, Result, WarplineError};

/// Tracks lab dips from submission through buyer approval.
#[derive(Default)]
pub struct LabDipTracker {
    dips: RwLock<Vec<LabDip>>,
}

impl LabDipTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new lab dip in `Pending` state.
    pub fn add(
        &self,
        opportunity_id: impl Into<String>,
        color_name: impl Into<String>,
        pantone_code: Option<String>,
    ) -> LabDip {
        let dip = LabDip {
            id: Uuid::new_v4().to_string(),
            opportunity_id: opportunity_id.into(),
            color_name: color_name.into(),
            pantone_code,
            status: LabDipStatus::Pending,
            submitted: None,
            comments: Vec::new(),
        };
        self.dips.write().push(dip.clone());
        dip
    }

    /// Look up a lab dip by id.
    pub fn get(&self, id: &str) -> Option<LabDip> {
        self.dips.read().iter().find(|dip| dip.id == id).cloned()
    }

    /// All lab dips linked to an opportunity, in insertion order.
    pub fn for_opportunity(&self, opportunity_id: &str) -> Vec<LabDip> {
        self.dips
            .read()
            .iter()
            .filter(|dip| dip.opportunity_id == opportunity_id)
            .cloned()
            .collect()
    }

    /// Change a lab dip's status.
    ///
    /// The first move to `Submitted` stamps the submission date.
    pub fn set_status(&self, id: &str, status: LabDipStatus) -> Result<LabDip> {
        let mut dips = self.dips.write();
        let dip = find_mut(&mut dips, id)?;
        dip.status = status;
        if status == LabDipStatus::Submitted && dip.submitted.is_none() {
            dip.submitted = Some(Utc::now().date_naive());
        }
        Ok(dip.clone())
    }

    /// Append a reviewer comment to a lab dip.
    pub fn add_comment(&self, id: &str, comment: impl Into<String>) -> Result<()> {
        let mut dips = self.dips.write();
        let dip = find_mut(&mut dips, id)?;
        dip.comments.push(comment.into());
        Ok(())
    }
}

fn find_mut<'a>(dips: &'a mut [LabDip], id: &str) -> Result<&'a mut LabDip> {
    dips.iter_mut()
        .find(|dip| dip.id == id)
        .ok_or_else(|| WarplineError::NotFound(format!("lab dip {id}")))
}

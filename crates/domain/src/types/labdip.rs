//! Lab dip (color sample) records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Approval state of a lab dip.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum LabDipStatus {
    #[default]
    Pending,
    Submitted,
    Approved,
    Rejected,
}

/// One color sample tracked toward buyer approval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabDip {
    pub id: String,
    /// Informal link to an opportunity; not enforced.
    pub opportunity_id: String,
    pub color_name: String,
    pub pantone_code: Option<String>,
    pub status: LabDipStatus,
    /// Stamped when the dip moves to `Submitted`.
    pub submitted: Option<NaiveDate>,
    #[serde(default)]
    pub comments: Vec<String>,
}

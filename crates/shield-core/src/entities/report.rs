use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A generated PDF document for a scan. A scan may have any number of reports.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub scan_id: i64,
    /// Web-addressable relative URL of the document, e.g. `/reports/report-4-1718000000000.pdf`.
    pub pdf_url: String,
    pub created_at: DateTime<Utc>,
}

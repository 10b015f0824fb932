//! Export serializers for computed results.
//!
//! Plain data-out formats handed back to reporting collaborators. The
//! engine owns no file format or wire protocol; these produce strings
//! the caller routes wherever it likes.

mod csv;
mod json;

pub use csv::{heat_map_csv, risk_scores_csv, vulnerability_scores_csv};
pub use json::{assessment_json, to_json, to_json_pretty};

//! Wire DTOs for the generation service.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Success payload of `POST /generate-test-cases`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTestCasesResponse {
    /// Generated test cases as free-form text. Missing and `null` both mean
    /// the service produced nothing.
    #[serde(default)]
    pub test_cases: Option<String>,
}

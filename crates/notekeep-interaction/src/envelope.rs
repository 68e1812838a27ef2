//! Response envelope.

use serde::Deserialize;

/// The `{ "data": ... }` wrapper around every resource response.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> DataEnvelope<Vec<T>> {
    /// List endpoints answering without `data` are treated as empty.
    pub fn into_list(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

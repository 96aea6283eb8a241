//! Session-scoped state: the transcript, the key/value store, and per-flow
//! request tokens.
//!
//! Everything here lives for the process session only; nothing is persisted.

use std::collections::HashMap;

use crate::error::{GeochatError, Result};
use crate::models::ChatMessage;

/// Append-only conversation history.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Entries are never mutated or removed afterwards.
    pub fn push(&mut self, message: ChatMessage) {
        self.entries.push(message);
    }

    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The newest entry, if any.
    pub fn latest(&self) -> Option<&ChatMessage> {
        self.entries.last()
    }
}

/// Session store key for the current asset's server-side path.
pub const CURRENT_FILE_KEY: &str = "current_file";

/// Session store key for the current tabular asset's column list.
pub const COLUMNS_KEY: &str = "columns";

/// Session-scoped key/value store.
///
/// Values are stored as text, matching the web client's string-only session
/// storage. Single writer per turn; last write wins, no versioning.
#[derive(Debug, Default)]
pub struct SessionStore {
    values: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set_current_file(&mut self, path: impl Into<String>) {
        self.set(CURRENT_FILE_KEY, path);
    }

    pub fn current_file(&self) -> Option<&str> {
        self.get(CURRENT_FILE_KEY)
    }

    /// Store the column list of the current tabular asset, serialized as
    /// JSON text.
    pub fn set_columns(&mut self, columns: &[String]) -> Result<()> {
        let text = serde_json::to_string(columns)
            .map_err(|e| GeochatError::Serialization(e.to_string()))?;
        self.set(COLUMNS_KEY, text);
        Ok(())
    }

    /// Read back the column list, if one has been stored.
    pub fn columns(&self) -> Result<Option<Vec<String>>> {
        match self.values.get(COLUMNS_KEY) {
            None => Ok(None),
            Some(text) => serde_json::from_str(text).map(Some).map_err(|e| {
                GeochatError::SessionValue {
                    key: COLUMNS_KEY.to_string(),
                    reason: e.to_string(),
                }
            }),
        }
    }
}

/// Request flows that track a "latest issued" token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Upload,
    Index,
    Query,
}

/// Token identifying one issued request within a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    flow: Flow,
    seq: u64,
}

impl RequestToken {
    pub fn flow(self) -> Flow {
        self.flow
    }
}

/// Per-flow monotonic token issuer.
///
/// A reply is rendered only when its token is still the latest issued for
/// its flow; anything older is stale and silently discarded. This resolves
/// the arrival-order race between overlapping in-flight requests.
#[derive(Debug, Default)]
pub struct FlowTokens {
    upload: u64,
    index: u64,
    query: u64,
}

impl FlowTokens {
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, flow: Flow) -> u64 {
        match flow {
            Flow::Upload => self.upload,
            Flow::Index => self.index,
            Flow::Query => self.query,
        }
    }

    fn counter_mut(&mut self, flow: Flow) -> &mut u64 {
        match flow {
            Flow::Upload => &mut self.upload,
            Flow::Index => &mut self.index,
            Flow::Query => &mut self.query,
        }
    }

    /// Issue a new token for `flow`, superseding all earlier ones.
    pub fn issue(&mut self, flow: Flow) -> RequestToken {
        let counter = self.counter_mut(flow);
        *counter += 1;
        RequestToken {
            flow,
            seq: *counter,
        }
    }

    /// Whether `token` is still the latest issued for its flow.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.counter(token.flow) == token.seq
    }
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{GroupId, OwnerId};

/// Thread identity as resolved by the host's trace-wide metadata store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadInfo {
    pub thread_name: String,
    pub tid: u64,
    #[serde(default)]
    pub pid: Option<GroupId>,
    #[serde(default)]
    pub process_name: Option<String>,
}

impl ThreadInfo {
    #[must_use]
    pub fn new(thread_name: impl Into<String>, tid: u64) -> Self {
        Self {
            thread_name: thread_name.into(),
            tid,
            pid: None,
            process_name: None,
        }
    }

    #[must_use]
    pub fn with_process(mut self, pid: GroupId, process_name: impl Into<String>) -> Self {
        self.pid = Some(pid);
        self.process_name = Some(process_name.into());
        self
    }
}

/// Read access to thread/process identity, supplied by the host.
pub trait MetadataStore {
    fn lookup(&self, owner: OwnerId) -> Option<&ThreadInfo>;
}

/// Insertion-ordered in-memory store for tests and simple hosts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryMetadataStore {
    threads: IndexMap<OwnerId, ThreadInfo>,
}

impl InMemoryMetadataStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, owner: OwnerId, info: ThreadInfo) {
        self.threads.insert(owner, info);
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn lookup(&self, owner: OwnerId) -> Option<&ThreadInfo> {
        self.threads.get(&owner)
    }
}

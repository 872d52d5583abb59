use super::types::{Record, RecordId, Removal, Update};

/// Insertion-ordered, in-memory record collection.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next inserted record will receive: highest current id plus one,
    /// or `RecordId::FIRST` when the store is empty.
    pub fn next_id(&self) -> RecordId {
        self.records
            .iter()
            .map(Record::id)
            .max()
            .map(RecordId::next)
            .unwrap_or(RecordId::FIRST)
    }

    /// Appends a new record and returns its id. The store does not validate input.
    pub fn add(&mut self, author: impl Into<String>, content: impl Into<String>) -> RecordId {
        let id = self.next_id();
        self.records.push(Record::new(id, author, content));
        tracing::debug!("Added record {}", id);
        id
    }

    /// Appends records whose ids were already allocated by the caller.
    ///
    /// Used by ingestion, which allocates a contiguous id range in one pass.
    pub(crate) fn extend(&mut self, records: Vec<Record>) {
        tracing::debug!("Appending batch of {} records", records.len());
        self.records.extend(records);
    }

    /// Deletes every record carrying `id`.
    pub fn remove(&mut self, id: RecordId) -> Removal {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);

        if self.records.len() < before {
            tracing::debug!("Removed record {}", id);
            Removal::Removed(id)
        } else {
            tracing::debug!("Remove: no record {}", id);
            Removal::NotFound(id)
        }
    }

    /// Overwrites author and content of the first record carrying `id`.
    pub fn update(
        &mut self,
        id: RecordId,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Update {
        match self.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                record.author = author.into();
                record.content = content.into();
                tracing::debug!("Updated record {}", id);
                Update::Updated(id)
            }
            None => {
                tracing::debug!("Update: no record {}", id);
                Update::NotFound(id)
            }
        }
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

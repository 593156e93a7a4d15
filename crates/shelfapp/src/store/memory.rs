use super::kv_store::KvStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = KvStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        KvStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::model::{BookRecord, CollectionName};
    use crate::store::CollectionStore;

    /// A small catalog with predictable ids: `b1`, `b2`, ...
    pub fn sample_books(count: usize) -> Vec<BookRecord> {
        (1..=count)
            .map(|i| {
                BookRecord::new(format!("b{}", i))
                    .with_title(format!("Book {}", i))
                    .with_authors([format!("Author {}", i)])
            })
            .collect()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_collection(mut self, name: &str, books: &[BookRecord]) -> Self {
            let name = CollectionName::new(name).unwrap();
            self.store.save_collection(&name, books).unwrap();
            self
        }

        pub fn with_raw(self, key: &str, raw: &str) -> Self {
            self.store.backend().insert_raw(key, raw);
            self
        }
    }
}

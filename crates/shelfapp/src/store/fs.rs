use super::fs_backend::FsBackend;
use super::kv_store::KvStore;
use std::path::PathBuf;

pub type FileStore = KvStore<FsBackend>;

impl FileStore {
    pub fn new_fs(root: PathBuf) -> Self {
        KvStore::with_backend(FsBackend::new(root))
    }
}

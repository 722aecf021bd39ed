use super::fs_backend::FsBackend;
use super::listing_store::ListingStore;
use std::path::PathBuf;

pub type FileStore = ListingStore<FsBackend>;

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        ListingStore::with_backend(FsBackend::new(root))
    }
}

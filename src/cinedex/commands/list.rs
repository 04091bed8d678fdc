use crate::error::Result;
use crate::model::Collection;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend + ?Sized>(store: &B) -> Result<Collection> {
    store.load()
}

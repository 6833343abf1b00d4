use std::sync::Arc;

use tokio::sync::RwLock;

/// Outcome of a cache read. A miss carries the generation observed at read
/// time; [`ListCache::put`] needs it back to detect renders that raced an
/// invalidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Hit(String),
    Miss(u64),
}

#[derive(Debug, Default)]
struct Inner {
    page: Option<String>,
    generation: u64,
}

/// Caches the rendered list page between writes. The create handler calls
/// [`ListCache::invalidate`] after committing, so the next list request
/// re-renders and observes the new quiz. Invalidation bumps a generation
/// counter, and `put` drops any render whose miss predates the bump; a page
/// read from the store before a create committed must never be cached after
/// that create invalidated.
#[derive(Debug, Clone, Default)]
pub struct ListCache {
    inner: Arc<RwLock<Inner>>,
}

impl ListCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Lookup {
        let inner = self.inner.read().await;
        match &inner.page {
            Some(page) => Lookup::Hit(page.clone()),
            None => Lookup::Miss(inner.generation),
        }
    }

    /// Stores a render produced after a miss, unless the cache has been
    /// invalidated since that miss.
    pub async fn put(&self, page: String, generation: u64) {
        let mut inner = self.inner.write().await;
        if inner.generation == generation {
            inner.page = Some(page);
        }
    }

    pub async fn invalidate(&self) {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.page = None;
    }
}

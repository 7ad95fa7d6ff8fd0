//! Barrel lifecycle: routing, buffering, flushing, lookup
//!
//! Words are partitioned into fixed-width barrels by integer division
//! (`word_id / barrel_size`), so each word's posting list has exactly
//! one home on disk. New postings accumulate in memory and are merged
//! into the existing barrel files on flush. A barrel's buffered
//! postings are only discarded after its file has been durably
//! replaced, so a failed flush can be retried without data loss.

use std::collections::BTreeMap;
use std::path::PathBuf;

use parking_lot::Mutex;
use roaring::RoaringBitmap;
use tracing::debug;

use crate::barrel::buffer::BarrelBuffer;
use crate::barrel::store::BarrelStore;
use crate::error::{Result, StaveError};
use crate::types::{BarrelId, DocumentId, WordId};

#[derive(Debug)]
pub struct BarrelManager {
    barrel_size: u32,
    store: BarrelStore,
    buffer: Mutex<BarrelBuffer>,
}

/// What a single flush wrote out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushStats {
    pub barrels_flushed: usize,
    pub postings_flushed: u64,
}

impl BarrelManager {
    pub fn new<P: Into<PathBuf>>(dir: P, barrel_size: u32) -> Result<Self> {
        if barrel_size == 0 {
            return Err(StaveError::Config(
                "barrel size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            barrel_size,
            store: BarrelStore::new(dir)?,
            buffer: Mutex::new(BarrelBuffer::new()),
        })
    }

    /// The barrel a word's posting list lives in
    pub fn barrel_id_for(&self, word_id: WordId) -> BarrelId {
        BarrelId(word_id.as_u32() / self.barrel_size)
    }

    /// Buffer one (word, document) posting for the next flush
    pub fn add_posting(&self, word_id: WordId, doc_id: DocumentId) {
        let barrel_id = self.barrel_id_for(word_id);
        self.buffer.lock().add(barrel_id, word_id, doc_id);
    }

    /// Postings buffered but not yet written
    pub fn pending_postings(&self) -> u64 {
        self.buffer.lock().posting_count()
    }

    /// Merge buffered postings into their barrel files.
    ///
    /// Each barrel is rewritten as the union of its current on-disk
    /// postings and the buffered ones, never replaced wholesale. If a
    /// write fails, that barrel's buffer (and all barrels after it)
    /// stays intact and the error is returned; flushed barrels keep
    /// their progress. Flushing the same postings again produces
    /// byte-identical files.
    pub fn flush(&self) -> Result<FlushStats> {
        let mut buffer = self.buffer.lock();
        let mut stats = FlushStats::default();

        for barrel_id in buffer.barrel_ids() {
            let mut merged = self.load_barrel(barrel_id);
            if let Some(pending) = buffer.pending(barrel_id) {
                for (&word_id, doc_ids) in pending {
                    let postings = merged.entry(word_id).or_insert_with(RoaringBitmap::new);
                    postings.extend(doc_ids.iter().copied());
                }
            }

            self.store.write(barrel_id, &merged)?;

            stats.postings_flushed += buffer.clear_barrel(barrel_id);
            stats.barrels_flushed += 1;
            debug!("flushed {} with {} posting lists", barrel_id, merged.len());
        }

        Ok(stats)
    }

    /// Read one barrel's full posting map.
    ///
    /// A missing file is an empty barrel. An unreadable file is logged
    /// and treated as empty; the next flush rewrites it.
    pub fn load_barrel(&self, barrel_id: BarrelId) -> BTreeMap<WordId, RoaringBitmap> {
        self.store
            .read(barrel_id)
            .or_default_logged(&barrel_id.to_string())
    }

    /// Documents containing a word, from the flushed index
    pub fn get_documents(&self, word_id: WordId) -> RoaringBitmap {
        self.load_barrel(self.barrel_id_for(word_id))
            .remove(&word_id)
            .unwrap_or_default()
    }

    /// Barrel ids that exist on disk
    pub fn barrel_ids(&self) -> Result<Vec<BarrelId>> {
        Ok(self.store.barrel_ids()?)
    }
}

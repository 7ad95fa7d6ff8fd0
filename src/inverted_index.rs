//! Inverted index construction
//!
//! Inverts the forward index into the barrel manager: every word
//! occurrence becomes a (word, document) posting, and a final flush
//! writes the barrels out. The inverted index has no in-memory form
//! of its own; barrels are its only representation.

use tracing::info;

use crate::barrel::{BarrelManager, FlushStats};
use crate::config::PROGRESS_INTERVAL;
use crate::error::Result;
use crate::forward_index::ForwardIndex;

pub struct InvertedIndexBuilder<'a> {
    barrels: &'a BarrelManager,
}

impl<'a> InvertedIndexBuilder<'a> {
    pub fn new(barrels: &'a BarrelManager) -> Self {
        Self { barrels }
    }

    /// Post every word occurrence in the forward index, then flush
    pub fn build(&self, forward_index: &ForwardIndex) -> Result<FlushStats> {
        for (processed, (doc_id, word_ids)) in forward_index.iter().enumerate() {
            for &word_id in word_ids {
                self.barrels.add_posting(word_id, doc_id);
            }
            if (processed + 1) % PROGRESS_INTERVAL == 0 {
                info!("Processed {} documents...", processed + 1);
            }
        }

        self.barrels.flush()
    }
}

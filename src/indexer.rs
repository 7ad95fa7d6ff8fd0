//! Full index build orchestration
//!
//! Runs the three stages in order: lexicon, forward index, inverted
//! index. Each stage's artifact is persisted before the next stage
//! starts, so the output directory always holds a consistent set.

use std::time::{Duration, Instant};

use tracing::info;

use crate::barrel::BarrelManager;
use crate::config::IndexConfig;
use crate::document::Document;
use crate::error::Result;
use crate::forward_index::ForwardIndex;
use crate::inverted_index::InvertedIndexBuilder;
use crate::lexicon::Lexicon;

pub struct Indexer {
    config: IndexConfig,
}

/// What a completed build produced
#[derive(Debug, Clone, Copy)]
pub struct BuildSummary {
    pub documents: usize,
    pub unique_words: usize,
    pub barrels_flushed: usize,
    pub elapsed: Duration,
}

impl Indexer {
    pub fn new(config: IndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Build every index artifact for a document collection
    pub fn build(&self, documents: &[Document]) -> Result<BuildSummary> {
        let started = Instant::now();
        std::fs::create_dir_all(&self.config.output_dir)?;

        info!("Building lexicon from {} documents", documents.len());
        let lexicon = Lexicon::from_documents(documents);
        lexicon.save(&self.config.lexicon_path())?;
        info!("Lexicon contains {} unique words", lexicon.len());

        info!("Building forward index");
        let forward_index = ForwardIndex::from_documents(&lexicon, documents);
        forward_index.save(&self.config.forward_index_path())?;

        info!("Building inverted index");
        let barrels = BarrelManager::new(self.config.barrels_dir(), self.config.barrel_size)?;
        let flush_stats = InvertedIndexBuilder::new(&barrels).build(&forward_index)?;

        let summary = BuildSummary {
            documents: documents.len(),
            unique_words: lexicon.len(),
            barrels_flushed: flush_stats.barrels_flushed,
            elapsed: started.elapsed(),
        };
        info!(
            "Indexed {} documents ({} unique words, {} barrels) in {:.2?}",
            summary.documents, summary.unique_words, summary.barrels_flushed, summary.elapsed
        );
        Ok(summary)
    }
}

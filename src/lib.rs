pub mod barrel;
pub mod config;
pub mod document;
pub mod error;
pub mod forward_index;
pub mod indexer;
pub mod inverted_index;
pub mod lexicon;
pub mod persistence;
pub mod tokenizer;
pub mod types;

pub use barrel::{BarrelManager, FlushStats};
pub use config::{IndexConfig, TokenizerConfig};
pub use document::{Document, RawDocument};
pub use error::{Result, StaveError};
pub use forward_index::{ForwardIndex, ForwardIndexBuilder};
pub use indexer::{BuildSummary, Indexer};
pub use inverted_index::InvertedIndexBuilder;
pub use lexicon::{Lexicon, LexiconBuilder};
pub use tokenizer::Tokenizer;
pub use types::{BarrelId, DocumentId, WordId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

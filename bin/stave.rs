use anyhow::{Context, Result};
use clap::Parser;
use stave::{Document, IndexConfig, Indexer, RawDocument, Tokenizer, TokenizerConfig};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "stave")]
#[command(about = "Barrel-partitioned search index builder", long_about = None)]
struct Args {
    /// Documents to index, one JSON object per line ({"id": ..., "text": ...})
    #[arg(long, env = "STAVE_INPUT")]
    input: PathBuf,

    /// Directory receiving the lexicon, forward index, and barrels
    #[arg(long, env = "STAVE_OUTPUT_DIR", default_value = "./index")]
    output_dir: PathBuf,

    /// Word ids per barrel
    #[arg(long, env = "STAVE_BARREL_SIZE", default_value = "2500")]
    barrel_size: u32,

    /// Only index the first N documents
    #[arg(long, env = "STAVE_MAX_DOCS")]
    max_docs: Option<usize>,

    /// Drop common English stopwords during tokenization
    #[arg(long, env = "STAVE_REMOVE_STOPWORDS")]
    remove_stopwords: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting stave v{}", stave::VERSION);
    info!("Indexing configuration:");
    info!("  Input: {:?}", args.input);
    info!("  Output directory: {:?}", args.output_dir);
    info!("  Barrel size: {}", args.barrel_size);
    info!("  Remove stopwords: {}", args.remove_stopwords);

    let tokenizer_config = TokenizerConfig {
        remove_stopwords: args.remove_stopwords,
        ..TokenizerConfig::default()
    };
    let tokenizer = Tokenizer::new(&tokenizer_config);

    let documents = load_documents(&args.input, &tokenizer, args.max_docs)?;
    info!("Loaded {} documents", documents.len());

    let config = IndexConfig::new(&args.output_dir).with_barrel_size(args.barrel_size);
    let indexer = Indexer::new(config)?;
    indexer.build(&documents)?;

    info!("Index written to {:?}", args.output_dir);
    Ok(())
}

fn load_documents(
    path: &Path,
    tokenizer: &Tokenizer,
    max_docs: Option<usize>,
) -> Result<Vec<Document>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut documents = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        if let Some(max) = max_docs {
            if documents.len() >= max {
                break;
            }
        }

        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let raw: RawDocument = serde_json::from_str(&line)
            .with_context(|| format!("invalid document on line {}", line_number + 1))?;
        documents.push(Document::new(raw.id, tokenizer.tokenize(&raw.text)));
    }

    Ok(documents)
}

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::info;
use wernicke::{server, Tagger};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the trained classifier artifact (JSON)
    #[arg(long, default_value = "nb_ner.json")]
    model: String,

    /// Path to the word-vector vocabulary table (CSV)
    #[arg(long, default_value = "word_vectors.csv")]
    vocabulary: String,

    /// Address to bind the HTTP server on
    #[arg(long, default_value = "127.0.0.1:5000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Artifacts load once at startup; any failure here is fatal and the
    // process exits before binding the listener.
    let tagger = Tagger::builder()
        .with_model_file(&args.model)?
        .with_vocabulary_file(&args.vocabulary)?
        .build()
        .context("Failed to load tagger artifacts")?;

    let tagger_info = tagger.info();
    info!(
        "Serving NER tagger: {} classes, {} vocabulary rows, {} dimensions",
        tagger_info.num_classes, tagger_info.vocab_size, tagger_info.feature_dim
    );

    let app = server::router(Arc::new(tagger));
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    info!("Listening on http://{}", args.bind);

    axum::serve(listener, app).await?;
    Ok(())
}

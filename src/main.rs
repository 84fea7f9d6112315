// Veracity CLI
// With arguments: analyze the joined text and print the JSON verdict on
// stdout. Without arguments: (re)train the bundled classifier and persist it.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use veracity::{CredibilityEngine, ModelStore, TfidfNaiveBayes};

fn main() -> anyhow::Result<()> {
    veracity::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let store = ModelStore::default_store();

    if args.is_empty() {
        let model = TfidfNaiveBayes::train_bundled().context("model training failed")?;
        store
            .save(&model)
            .with_context(|| format!("failed to persist model to {}", store.path().display()))?;
        info!("Model training complete");
        return Ok(());
    }

    let text = args.join(" ");
    let model = store
        .load_or_train()
        .context("no usable model and retraining failed")?;
    let engine = CredibilityEngine::new(Arc::new(model));

    let result = engine.analyze(&text);
    println!("{}", serde_json::to_string(&result)?);

    Ok(())
}

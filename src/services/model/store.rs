// Model Store
// Persists the trained classifier as a versioned JSON artifact and loads it
// lazily. The artifact schema is explicitly tagged so loading is unambiguous;
// an unknown tag fails parsing and the caller retrains from the bundled
// corpus instead.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{ModelError, TfidfNaiveBayes};

const MODEL_FILE_NAME: &str = "model.json";
const MODEL_PATH_ENV: &str = "VERACITY_MODEL_PATH";

/// Persisted model state. New schema revisions get new variants; the tag
/// keeps old artifacts readable without type-probing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum ModelArtifact {
    #[serde(rename = "v1")]
    V1(ModelArtifactV1),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelArtifactV1 {
    pub trained_at: String,
    pub terms: Vec<String>,
    pub idf: Vec<f64>,
    pub class_log_prior: [f64; 2],
    pub feature_log_prob: Vec<[f64; 2]>,
}

impl ModelArtifact {
    pub fn from_model(model: &TfidfNaiveBayes) -> Self {
        Self::V1(ModelArtifactV1 {
            trained_at: chrono::Utc::now().to_rfc3339(),
            terms: model.terms.clone(),
            idf: model.idf.clone(),
            class_log_prior: model.class_log_prior,
            feature_log_prob: model.feature_log_prob.clone(),
        })
    }

    pub fn into_model(self) -> TfidfNaiveBayes {
        match self {
            Self::V1(v1) => TfidfNaiveBayes::from_parts(
                v1.terms,
                v1.idf,
                v1.class_log_prior,
                v1.feature_log_prob,
            ),
        }
    }
}

pub struct ModelStore {
    model_file: PathBuf,
}

impl ModelStore {
    pub fn new(model_file: PathBuf) -> Self {
        Self { model_file }
    }

    /// Store at the well-known per-user location, unless overridden via
    /// VERACITY_MODEL_PATH.
    pub fn default_store() -> Self {
        let model_file = match std::env::var(MODEL_PATH_ENV) {
            Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
            _ => Self::default_data_dir().join(MODEL_FILE_NAME),
        };
        Self::new(model_file)
    }

    fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|p| p.join("veracity"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn path(&self) -> &PathBuf {
        &self.model_file
    }

    /// Load the persisted model artifact.
    pub fn load(&self) -> Result<TfidfNaiveBayes, ModelError> {
        if !self.model_file.exists() {
            return Err(ModelError::NotFound(self.model_file.clone()));
        }

        let content = fs::read_to_string(&self.model_file)?;
        let artifact: ModelArtifact = serde_json::from_str(&content)?;
        Ok(artifact.into_model())
    }

    /// Persist the model, creating parent directories as needed.
    pub fn save(&self, model: &TfidfNaiveBayes) -> Result<(), ModelError> {
        if let Some(parent) = self.model_file.parent() {
            fs::create_dir_all(parent)?;
        }

        let artifact = ModelArtifact::from_model(model);
        let content = serde_json::to_string(&artifact)?;
        fs::write(&self.model_file, content)?;
        info!(path = %self.model_file.display(), "model artifact saved");
        Ok(())
    }

    /// Load the persisted model, retraining from the bundled corpus when the
    /// artifact is absent or unreadable. The retrained model is persisted
    /// best-effort; a failed save never fails the analysis.
    pub fn load_or_train(&self) -> Result<TfidfNaiveBayes, ModelError> {
        match self.load() {
            Ok(model) => Ok(model),
            Err(err) => {
                warn!(
                    path = %self.model_file.display(),
                    error = %err,
                    "model artifact unavailable; training from bundled corpus"
                );
                let model = TfidfNaiveBayes::train_bundled()?;
                if let Err(save_err) = self.save(&model) {
                    warn!(error = %save_err, "failed to persist retrained model");
                }
                Ok(model)
            }
        }
    }
}

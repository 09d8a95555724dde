use std::sync::Arc;

use tokio::sync::OnceCell;

use ptsd_model::artifact::{ClassifierArtifact, ModelBundle, ScalerArtifact};

use crate::error::ProviderError;
use crate::source::ArtifactSource;

/// Fetches the scaler and classifier on first use and hands out the same
/// decoded bundle for the rest of the process lifetime.
///
/// A failed load leaves the cache empty, so a later call fetches again.
pub struct ModelProvider {
    scaler: ArtifactSource,
    classifier: ArtifactSource,
    bundle: OnceCell<Arc<ModelBundle>>,
}

impl ModelProvider {
    pub fn new(scaler: ArtifactSource, classifier: ArtifactSource) -> Self {
        Self {
            scaler,
            classifier,
            bundle: OnceCell::new(),
        }
    }

    pub fn scaler_source(&self) -> &ArtifactSource {
        &self.scaler
    }

    pub fn classifier_source(&self) -> &ArtifactSource {
        &self.classifier
    }

    pub fn is_loaded(&self) -> bool {
        self.bundle.initialized()
    }

    /// The cached bundle, loading it first if needed. Concurrent first
    /// callers share a single fetch.
    pub async fn bundle(&self) -> Result<Arc<ModelBundle>, ProviderError> {
        self.bundle
            .get_or_try_init(|| async {
                load_bundle(&self.scaler, &self.classifier)
                    .await
                    .map(Arc::new)
            })
            .await
            .map(Arc::clone)
    }
}

/// Fetch and decode both artifacts, with no caching.
pub async fn load_bundle(
    scaler: &ArtifactSource,
    classifier: &ArtifactSource,
) -> Result<ModelBundle, ProviderError> {
    let scaler_bytes = fetch(scaler.clone()).await?;
    let classifier_bytes = fetch(classifier.clone()).await?;

    let scaler_artifact =
        ScalerArtifact::decode(&scaler_bytes).map_err(|source| ProviderError::Decode {
            location: scaler.to_string(),
            source,
        })?;
    let classifier_artifact =
        ClassifierArtifact::decode(&classifier_bytes).map_err(|source| {
            ProviderError::Decode {
                location: classifier.to_string(),
                source,
            }
        })?;

    Ok(ModelBundle::new(scaler_artifact, classifier_artifact))
}

async fn fetch(source: ArtifactSource) -> Result<Vec<u8>, ProviderError> {
    tokio::task::spawn_blocking(move || source.fetch())
        .await
        .map_err(|e| ProviderError::Task(e.to_string()))?
}

//! Poster Accessor - promotional images
//!
//! The movie slot is a single document whose `img` is swapped in place;
//! activity posters are appended and deleted individually.

use crate::error::collapse;
use crate::media::{ChooseMediaOptions, FileStorage, MediaPicker};
use crate::store::{Document, DocumentStore, Filter};
use crate::{ClientConfig, StoreError};
use serde_json::Value;
use shared::{CatalogError, CatalogResult, Poster, PosterKind, resolve_url_with};
use std::sync::Arc;

pub const POSTERS_COLLECTION: &str = "posters";

/// Accessor for the `posters` collection and poster uploads
#[derive(Clone)]
pub struct PosterAccessor {
    store: Arc<dyn DocumentStore>,
    storage: Arc<dyn FileStorage>,
    picker: Arc<dyn MediaPicker>,
    domain_suffix: String,
}

impl std::fmt::Debug for PosterAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PosterAccessor")
            .field("domain_suffix", &self.domain_suffix)
            .finish()
    }
}

impl PosterAccessor {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        storage: Arc<dyn FileStorage>,
        picker: Arc<dyn MediaPicker>,
        config: &ClientConfig,
    ) -> Self {
        Self {
            store,
            storage,
            picker,
            domain_suffix: config.domain_suffix.clone(),
        }
    }

    /// Posters of one kind, or of every kind when `kind` is `None`
    pub async fn get_posters(&self, kind: Option<PosterKind>) -> CatalogResult<Vec<Poster>> {
        let kinds: Vec<PosterKind> = match kind {
            Some(kind) => vec![kind],
            None => PosterKind::ALL.to_vec(),
        };
        let filter = Filter::new().is_in("type", kinds.iter().map(|k| k.as_str()));

        async {
            let documents = self.store.query(POSTERS_COLLECTION, &filter).await?;
            documents
                .into_iter()
                .map(|doc| serde_json::from_value::<Poster>(doc).map_err(StoreError::from))
                .collect::<Result<Vec<_>, _>>()
        }
        .await
        .map_err(collapse(CatalogError::QueryFailed, "get_posters"))
    }

    /// Clear the movie slot, or delete an activity poster
    ///
    /// Returns the number of documents affected.
    pub async fn remove_poster(&self, kind: PosterKind, poster: &Poster) -> CatalogResult<u64> {
        let affected = async {
            match kind {
                PosterKind::Movie => {
                    let result = self
                        .store
                        .update_where(POSTERS_COLLECTION, &movie_slot(), img_field(""))
                        .await?;
                    Ok::<_, StoreError>(result.updated)
                }
                PosterKind::Activity => {
                    let id = poster.id.as_deref().ok_or_else(|| {
                        StoreError::Invalid("poster has no identifier".to_string())
                    })?;
                    let result = self.store.remove_doc(POSTERS_COLLECTION, id).await?;
                    Ok(result.removed)
                }
            }
        }
        .await
        .map_err(collapse(CatalogError::DeleteFailed, "remove_poster"))?;

        tracing::info!(kind = %kind, affected, "Poster removed");
        Ok(affected)
    }

    /// Pick one image, upload it and record it under `kind`
    ///
    /// Returns the public URL of the uploaded image.
    pub async fn upload_poster(&self, kind: PosterKind) -> CatalogResult<String> {
        let url = async {
            let chosen = self
                .picker
                .choose_media(&ChooseMediaOptions::single_image())
                .await?;
            let file = chosen
                .into_iter()
                .next()
                .ok_or_else(|| StoreError::Invalid("no image chosen".to_string()))?;

            let cloud_path = format!("{}.png", chrono::Utc::now().timestamp_millis());
            let uploaded = self
                .storage
                .upload_file(&cloud_path, &file.temp_file_path)
                .await?;
            let url = resolve_url_with(&uploaded.file_id, &self.domain_suffix);

            match kind {
                PosterKind::Movie => {
                    self.store
                        .update_where(POSTERS_COLLECTION, &movie_slot(), img_field(&url))
                        .await?;
                }
                PosterKind::Activity => {
                    let mut data = img_field(&url);
                    data.insert(
                        "type".to_string(),
                        Value::String(PosterKind::Activity.as_str().to_string()),
                    );
                    self.store.add(POSTERS_COLLECTION, data).await?;
                }
            }
            Ok::<_, StoreError>(url)
        }
        .await
        .map_err(collapse(CatalogError::UploadFailed, "upload_poster"))?;

        tracing::info!(kind = %kind, url = %url, "Poster uploaded");
        Ok(url)
    }
}

fn movie_slot() -> Filter {
    Filter::new().eq("type", PosterKind::Movie.as_str())
}

fn img_field(url: &str) -> Document {
    let mut data = Document::new();
    data.insert("img".to_string(), Value::String(url.to_string()));
    data
}

//! Media selection and file storage seams

use crate::StoreResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Album,
    Camera,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraFacing {
    Back,
    Front,
}

/// What the picker should offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChooseMediaOptions {
    pub count: u32,
    pub media_type: Vec<MediaType>,
    pub source_type: Vec<SourceType>,
    pub camera: CameraFacing,
}

impl ChooseMediaOptions {
    /// One image from the album or the back camera
    pub fn single_image() -> Self {
        Self {
            count: 1,
            media_type: vec![MediaType::Image],
            source_type: vec![SourceType::Album, SourceType::Camera],
            camera: CameraFacing::Back,
        }
    }
}

/// Locally available file chosen by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TempFile {
    pub temp_file_path: PathBuf,
    pub size: u64,
}

/// Storage acknowledgement carrying the store-internal file link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(rename = "fileID")]
    pub file_id: String,
}

/// Lets the user pick media files
#[async_trait]
pub trait MediaPicker: Send + Sync {
    /// Chosen files, empty when the user picked nothing
    async fn choose_media(&self, options: &ChooseMediaOptions) -> StoreResult<Vec<TempFile>>;
}

/// Object storage for uploaded files
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Upload `file_path` to `cloud_path`, returning the `cloud://` file id
    async fn upload_file(&self, cloud_path: &str, file_path: &Path) -> StoreResult<UploadResult>;
}

/// Picker over a fixed list of local paths
///
/// Used where there is no interactive chooser (command line, tests).
#[derive(Debug, Clone, Default)]
pub struct LocalFilePicker {
    paths: Vec<PathBuf>,
}

impl LocalFilePicker {
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl MediaPicker for LocalFilePicker {
    async fn choose_media(&self, options: &ChooseMediaOptions) -> StoreResult<Vec<TempFile>> {
        let mut chosen = Vec::new();
        for path in self.paths.iter().take(options.count as usize) {
            let metadata = tokio::fs::metadata(path).await?;
            chosen.push(TempFile {
                temp_file_path: path.clone(),
                size: metadata.len(),
            });
        }
        tracing::debug!(count = chosen.len(), "Media chosen");
        Ok(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_picker_honours_count() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.png");
        let second = dir.path().join("b.png");
        std::fs::write(&first, b"1234").unwrap();
        std::fs::write(&second, b"5").unwrap();

        let picker = LocalFilePicker::new([&first, &second]);
        let files = picker
            .choose_media(&ChooseMediaOptions::single_image())
            .await
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].temp_file_path, first);
        assert_eq!(files[0].size, 4);
    }

    #[tokio::test]
    async fn test_local_picker_missing_file_fails() {
        let picker = LocalFilePicker::new(["/definitely/not/here.png"]);
        assert!(
            picker
                .choose_media(&ChooseMediaOptions::single_image())
                .await
                .is_err()
        );
    }

    #[test]
    fn test_options_wire_form() {
        let value = serde_json::to_value(ChooseMediaOptions::single_image()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "count": 1,
                "mediaType": ["image"],
                "sourceType": ["album", "camera"],
                "camera": "back"
            })
        );
    }
}

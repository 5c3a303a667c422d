use thiserror::Error;

use crate::global_constants;

#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("size_bytes", &self.size_bytes())
            .finish()
    }
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_image(&self) -> bool {
        self.media_type
            .starts_with(global_constants::IMAGE_MEDIA_TYPE_PREFIX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadValidationError {
    #[error("{}", global_constants::USER_MESSAGE_NO_FILE)]
    NoFileSelected,
    #[error("{}", global_constants::USER_MESSAGE_FILE_TOO_LARGE)]
    FileTooLarge { size_bytes: usize },
    #[error("{}", global_constants::USER_MESSAGE_INVALID_TYPE)]
    UnsupportedMediaType(String),
}

impl UploadValidationError {
    pub fn diagnostic(&self) -> String {
        match self {
            UploadValidationError::NoFileSelected => "no file selected".to_string(),
            UploadValidationError::FileTooLarge { size_bytes } => format!(
                "{} bytes exceeds the {} byte limit",
                size_bytes,
                global_constants::MAX_UPLOAD_BYTES
            ),
            UploadValidationError::UnsupportedMediaType(media_type) => {
                format!("media type '{}' is not accepted", media_type)
            }
        }
    }
}

/// A validated upload, ready to be sent as a raw-body `PUT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file: SelectedFile,
    pub derived_file_name: String,
    pub custom_labels: Option<String>,
}

impl UploadRequest {
    pub fn prepare(
        file: Option<SelectedFile>,
        custom_labels: &str,
        timestamp_millis: i64,
    ) -> Result<Self, UploadValidationError> {
        let file = file.ok_or(UploadValidationError::NoFileSelected)?;

        if file.size_bytes() > global_constants::MAX_UPLOAD_BYTES {
            return Err(UploadValidationError::FileTooLarge {
                size_bytes: file.size_bytes(),
            });
        }

        let media_type = file.media_type.to_lowercase();
        if !global_constants::ACCEPTED_MEDIA_TYPES.contains(&media_type.as_str()) {
            return Err(UploadValidationError::UnsupportedMediaType(
                file.media_type.clone(),
            ));
        }

        let custom_labels = custom_labels.trim();
        let derived_file_name = derive_file_name(&file.name, timestamp_millis);

        Ok(Self {
            file,
            derived_file_name,
            custom_labels: (!custom_labels.is_empty()).then(|| custom_labels.to_string()),
        })
    }
}

/// Builds the storage key `<sanitized-base>-<millis>.<lowercased-extension>`.
///
/// The extension is whatever follows the final `.`, so a name without a dot
/// is used as its own extension.
pub fn derive_file_name(original_name: &str, timestamp_millis: i64) -> String {
    let extension = original_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    let sanitized_base: String = strip_trailing_extension(original_name)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    format!("{}-{}.{}", sanitized_base, timestamp_millis, extension)
}

fn strip_trailing_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() && !name[dot + 1..].contains('/') => &name[..dot],
        _ => name,
    }
}

//! Loads image files picked by the user into attachments.

use petmap_core::point::ImageAttachment;
use petmap_core::{PetMapError, Result};
use std::path::Path;

/// Infers the MIME type from a filename extension using the `mime_guess` library.
fn infer_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

/// Reads `path` into an [`ImageAttachment`].
///
/// Files whose extension does not map to an `image/*` type are rejected.
pub async fn load_image_attachment(path: &Path) -> Result<ImageAttachment> {
    let content_type = infer_mime_type(path);
    if !content_type.starts_with("image/") {
        return Err(PetMapError::validation(format!(
            "{} is not an image ({})",
            path.display(),
            content_type
        )));
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| PetMapError::validation(format!("{} has no file name", path.display())))?;

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!("Loaded image {} ({} bytes)", file_name, bytes.len());

    Ok(ImageAttachment::new(file_name, content_type, bytes))
}

use super::{LoadError, PendingAsset};
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// A decoded image, ready to be uploaded.
///
/// Decoding happens on the loader thread so the render thread only uploads.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureData {
    /// Name the texture is registered under in the renderer.
    pub name: String,
    /// Decoded pixels.
    pub image: DynamicImage,
}

impl TextureData {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Reads and decodes an image file.
///
/// The texture is named after the full path, so two files sharing a stem in
/// different directories stay distinct textures.
pub fn load_texture(path: impl AsRef<Path>) -> Result<TextureData, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let texture = texture_from_memory(path.display().to_string(), &bytes)?;
    log::info!(
        "loaded texture {} ({}x{})",
        path.display(),
        texture.width(),
        texture.height()
    );

    Ok(texture)
}

/// Decodes an encoded image held in memory.
pub fn texture_from_memory(
    name: impl Into<String>,
    bytes: &[u8],
) -> Result<TextureData, LoadError> {
    Ok(TextureData {
        name: name.into(),
        image: image::load_from_memory(bytes)?,
    })
}

/// Starts loading a texture on a background thread.
pub fn spawn_texture(path: impl Into<PathBuf>) -> PendingAsset<TextureData> {
    let path = path.into();
    PendingAsset::spawn(path.display().to_string(), move || load_texture(&path))
}

use std::path::PathBuf;

/// Why an asset could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The glTF document or its buffers are invalid.
    #[error("failed to load glTF model: {0}")]
    Gltf(#[from] gltf::Error),

    /// The model parsed but contains nothing to draw.
    #[error("model {0} has no triangle data")]
    EmptyModel(PathBuf),

    /// The image could not be decoded.
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    /// The loading thread went away without reporting a result.
    #[error("asset loader disconnected")]
    Disconnected,
}

//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// A sprite could not be turned into a texture
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unable to load image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// GPU setup failed before the first frame
#[derive(Debug, Error)]
pub enum RenderInitError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface has no supported format")]
    NoSurfaceFormat,
}

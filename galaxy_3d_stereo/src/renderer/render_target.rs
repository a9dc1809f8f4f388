/// RenderTarget trait - offscreen color buffer owned by a composite strategy

use crate::error::Result;

/// Color format of an offscreen target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    R8G8B8A8_SRGB,
    R8G8B8A8_UNORM,
    B8G8R8A8_SRGB,
    B8G8R8A8_UNORM,
    R16G16B16A16_SFLOAT,
}

impl TextureFormat {
    /// True when sampling the format decodes sRGB in hardware
    pub fn is_srgb(self) -> bool {
        matches!(self, TextureFormat::R8G8B8A8_SRGB | TextureFormat::B8G8R8A8_SRGB)
    }
}

/// Sampling filter used when the composition pass reads a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

/// Descriptor for creating a render target
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTargetDesc {
    /// Width in physical pixels
    pub width: u32,
    /// Height in physical pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Minification filter
    pub min_filter: FilterMode,
    /// Magnification filter
    pub mag_filter: FilterMode,
}

impl RenderTargetDesc {
    /// Descriptor for an eye target: linear minification, nearest
    /// magnification so interlaced rows never bleed into each other
    pub fn eye_target(width: u32, height: u32, format: TextureFormat) -> Self {
        Self {
            width,
            height,
            format,
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Nearest,
        }
    }
}

/// Render target trait
///
/// Offscreen surface rendered to by an eye pass and sampled by the
/// composition pass.
pub trait RenderTarget {
    /// Width of the render target in pixels
    fn width(&self) -> u32;

    /// Height of the render target in pixels
    fn height(&self) -> u32;

    /// Pixel format of the render target
    fn format(&self) -> TextureFormat;

    /// Reallocate the target storage at a new size
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    /// Free the GPU storage. Called at most once per target.
    fn release(&mut self);
}

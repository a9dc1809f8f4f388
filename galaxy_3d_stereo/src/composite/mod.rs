/// Composite module - stereo presentation strategies
///
/// Three strategies implement `CompositeStrategy`:
/// - `SideBySide`: scissor-split surface, full size or half-width packed
/// - `Interlaced`: two offscreen targets combined row by row
/// - `Anaglyph`: two offscreen targets color-filtered into one image

mod color;
mod cpu_composite;
mod strategy_kind;
mod composite_strategy;
mod stereo_targets;
mod side_by_side;
mod interlaced;
mod anaglyph;

pub use color::{
    srgb_to_linear, linear_to_srgb, decode_rgba, encode_rgb,
    AnaglyphPreset, ColorMixMatrix,
};
pub use cpu_composite::{interlace_in_place, anaglyph_in_place, interlace_row_is_left};
pub use strategy_kind::StrategyKind;
pub use composite_strategy::{CompositeStrategy, source_eye};
pub use stereo_targets::{StereoTargets, physical_size, check_surface_size};
pub use side_by_side::SideBySide;
pub use interlaced::Interlaced;
pub use anaglyph::Anaglyph;

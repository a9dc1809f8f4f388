/// CPU reference for the composition passes
///
/// Same per-pixel rules as `INTERLACE_FRAGMENT_GLSL` and
/// `ANAGLYPH_FRAGMENT_GLSL`, applied to row-major RGBA buffers. Backends
/// without a GPU path (software renderers, tests) composite with these.

use glam::Vec4;
use crate::error::Result;
use crate::engine_param_bail;
use super::color::ColorMixMatrix;

/// True if output row `row` samples the left eye
pub fn interlace_row_is_left(row: u32) -> bool {
    row % 2 != 0
}

/// Row-interlace two eye images into `dst`
///
/// All three buffers hold `width * height` pixels, row-major, row 0 at the top.
pub fn interlace_in_place(
    dst: &mut [Vec4],
    left: &[Vec4],
    right: &[Vec4],
    width: u32,
    height: u32,
) -> Result<()> {
    check_buffers("interlace_in_place", dst, left, right, width, height)?;
    if width == 0 {
        return Ok(());
    }

    let width = width as usize;
    for (row, ((d, l), r)) in dst
        .chunks_exact_mut(width)
        .zip(left.chunks_exact(width))
        .zip(right.chunks_exact(width))
        .enumerate()
    {
        let src = if interlace_row_is_left(row as u32) { l } else { r };
        d.copy_from_slice(src);
    }
    Ok(())
}

/// Anaglyph-mix two eye images into `dst`
pub fn anaglyph_in_place(
    dst: &mut [Vec4],
    left: &[Vec4],
    right: &[Vec4],
    mix: &ColorMixMatrix,
    width: u32,
    height: u32,
) -> Result<()> {
    check_buffers("anaglyph_in_place", dst, left, right, width, height)?;

    for ((d, l), r) in dst.iter_mut().zip(left).zip(right) {
        *d = mix.mix(*l, *r);
    }
    Ok(())
}

fn check_buffers(
    caller: &str,
    dst: &[Vec4],
    left: &[Vec4],
    right: &[Vec4],
    width: u32,
    height: u32,
) -> Result<()> {
    let expected = width as usize * height as usize;
    if dst.len() != expected || left.len() != expected || right.len() != expected {
        engine_param_bail!("galaxy3d::composite::Cpu",
            "{} expects three {}x{} buffers (got {}, {}, {} pixels)",
            caller, width, height, dst.len(), left.len(), right.len());
    }
    Ok(())
}

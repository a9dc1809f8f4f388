/// Unit tests for MockRenderer and its mock types.

use glam::{Mat4, Vec4};
use crate::camera::{EyeLayers, RenderCamera};
use crate::composite::{AnaglyphPreset, ColorMixMatrix};
use crate::error::Error;
use crate::renderer::mock_renderer::*;
use crate::renderer::{
    Renderer, RenderTarget, RenderTargetDesc, CompositePass, TextureFormat, Rect2D,
};

fn eye_camera(layers: EyeLayers) -> RenderCamera {
    RenderCamera::new(Mat4::IDENTITY, Mat4::IDENTITY, layers)
}

fn target_desc(width: u32, height: u32) -> RenderTargetDesc {
    RenderTargetDesc::eye_target(width, height, TextureFormat::R8G8B8A8_UNORM)
}

// ============================================================================
// MockScene Tests
// ============================================================================

#[test]
fn test_mock_scene_color_per_layer() {
    let scene = MockScene::new();

    assert_eq!(scene.color_for(EyeLayers::DEFAULT | EyeLayers::LEFT), MockScene::RED);
    assert_eq!(scene.color_for(EyeLayers::DEFAULT | EyeLayers::RIGHT), MockScene::BLUE);
    assert_eq!(scene.color_for(EyeLayers::DEFAULT), MockScene::GREEN);
}

// ============================================================================
// MockRenderTarget Tests
// ============================================================================

#[test]
fn test_mock_target_creation() {
    let mut renderer = MockRenderer::new(4, 2);
    let target = renderer.create_render_target(&target_desc(4, 2)).unwrap();

    assert_eq!(target.id, 1);
    assert_eq!(target.width(), 4);
    assert_eq!(target.height(), 2);
    assert_eq!(target.format(), TextureFormat::R8G8B8A8_UNORM);
    assert_eq!(target.pixels.len(), 8);
    assert_eq!(renderer.created_targets(), 1);
}

#[test]
fn test_mock_target_resize() {
    let mut renderer = MockRenderer::new(4, 2);
    let mut target = renderer.create_render_target(&target_desc(4, 2)).unwrap();

    target.resize(8, 8).unwrap();
    assert_eq!((target.width(), target.height()), (8, 8));
    assert_eq!(target.pixels.len(), 64);
    assert_eq!(target.resize_count, 1);
}

#[test]
fn test_mock_target_resize_failure_once() {
    let mut renderer = MockRenderer::new(4, 2);
    let mut target = renderer.create_render_target(&target_desc(4, 2)).unwrap();
    target.fail_resize = true;

    assert!(matches!(target.resize(8, 8), Err(Error::OutOfMemory)));
    assert_eq!((target.width(), target.height()), (4, 2));
    assert_eq!(target.resize_count, 0);

    target.resize(8, 8).unwrap();
    assert_eq!(target.resize_count, 1);
}

#[test]
fn test_mock_target_release_once() {
    let mut renderer = MockRenderer::new(4, 2);
    let mut target = renderer.create_render_target(&target_desc(4, 2)).unwrap();

    target.release();
    target.release();

    assert!(target.is_released());
    assert_eq!(renderer.released_targets(), vec![1]);
    assert!(matches!(target.resize(2, 2), Err(Error::InvalidResource(_))));
}

#[test]
fn test_mock_target_allocation_failure() {
    let mut renderer = MockRenderer::new(4, 2);
    renderer.fail_target_at = Some(1);

    assert!(renderer.create_render_target(&target_desc(4, 2)).is_ok());
    assert_eq!(renderer.create_render_target(&target_desc(4, 2)).unwrap_err(), Error::OutOfMemory);
}

// ============================================================================
// MockRenderer Tests
// ============================================================================

#[test]
fn test_render_into_target() {
    let mut renderer = MockRenderer::new(2, 2);
    let mut target = renderer.create_render_target(&target_desc(2, 2)).unwrap();
    let scene = MockScene::new();

    renderer
        .render(&scene, &eye_camera(EyeLayers::DEFAULT | EyeLayers::LEFT), Some(&mut target), true)
        .unwrap();

    assert!(target.pixels.iter().all(|p| *p == MockScene::RED));
    assert!(renderer.surface.iter().all(|p| *p == Vec4::ZERO));
    assert!(matches!(
        renderer.render_commands()[0],
        MockCommand::Render { target: Some(1), clear: true, .. }
    ));
}

#[test]
fn test_render_to_surface_respects_scissor() {
    let mut renderer = MockRenderer::new(4, 1);
    let scene = MockScene::new();

    renderer.set_scissor(Rect2D { x: 0, y: 0, width: 2, height: 1 }).unwrap();
    renderer.set_scissor_test(true).unwrap();
    renderer.render(&scene, &eye_camera(EyeLayers::DEFAULT), None, false).unwrap();

    assert_eq!(renderer.surface_row(0), &[MockScene::GREEN, MockScene::GREEN, Vec4::ZERO, Vec4::ZERO]);

    renderer.set_scissor_test(false).unwrap();
    renderer.clear().unwrap();
    assert!(renderer.surface.iter().all(|p| *p == Vec4::ZERO));
}

#[test]
fn test_render_failure_injection() {
    let mut renderer = MockRenderer::new(2, 2);
    renderer.fail_render_at = Some(1);
    let scene = MockScene::new();
    let camera = eye_camera(EyeLayers::DEFAULT);

    assert!(renderer.render(&scene, &camera, None, false).is_ok());
    assert!(matches!(
        renderer.render(&scene, &camera, None, false),
        Err(Error::BackendError(_))
    ));
    assert!(renderer.render(&scene, &camera, None, false).is_ok());
    assert_eq!(renderer.render_commands().len(), 2);
}

#[test]
fn test_render_into_released_target_fails() {
    let mut renderer = MockRenderer::new(2, 2);
    let mut target = renderer.create_render_target(&target_desc(2, 2)).unwrap();
    target.release();

    let result = renderer.render(&MockScene::new(), &eye_camera(EyeLayers::DEFAULT), Some(&mut target), true);
    assert!(matches!(result, Err(Error::InvalidResource(_))));
}

#[test]
fn test_set_output_size() {
    let mut renderer = MockRenderer::with_pixel_ratio(2, 2, 2.0);

    renderer.set_output_size(8, 4).unwrap();

    assert_eq!(renderer.output_size(), (8, 4));
    assert_eq!(renderer.pixel_ratio(), 2.0);
    assert_eq!(renderer.surface.len(), 32);
    assert_eq!(renderer.commands, vec![MockCommand::SetOutputSize(8, 4)]);
}

#[test]
fn test_composite_interlaced() {
    let mut renderer = MockRenderer::new(2, 3);
    let mut left = renderer.create_render_target(&target_desc(2, 3)).unwrap();
    let mut right = renderer.create_render_target(&target_desc(2, 3)).unwrap();
    left.pixels.fill(MockScene::RED);
    right.pixels.fill(MockScene::BLUE);

    renderer.composite(&CompositePass::Interlaced { left: &left, right: &right }).unwrap();

    assert!(renderer.surface_row(0).iter().all(|p| *p == MockScene::BLUE));
    assert!(renderer.surface_row(1).iter().all(|p| *p == MockScene::RED));
    assert!(renderer.surface_row(2).iter().all(|p| *p == MockScene::BLUE));
    assert_eq!(
        renderer.commands.last(),
        Some(&MockCommand::Composite { left: 1, right: 2, anaglyph: false })
    );
}

#[test]
fn test_composite_anaglyph() {
    let mut renderer = MockRenderer::new(1, 1);
    let mut left = renderer.create_render_target(&target_desc(1, 1)).unwrap();
    let mut right = renderer.create_render_target(&target_desc(1, 1)).unwrap();
    left.pixels.fill(Vec4::ONE);
    right.pixels.fill(Vec4::ONE);
    let mix = ColorMixMatrix::for_preset(AnaglyphPreset::RedCyan);

    renderer.composite(&CompositePass::Anaglyph { left: &left, right: &right, mix }).unwrap();

    assert!((renderer.surface_pixel(0, 0) - Vec4::ONE).abs().max_element() < 1e-4);
}

#[test]
fn test_composite_rejects_size_mismatch() {
    let mut renderer = MockRenderer::new(2, 2);
    let left = renderer.create_render_target(&target_desc(4, 4)).unwrap();
    let right = renderer.create_render_target(&target_desc(4, 4)).unwrap();

    let result = renderer.composite(&CompositePass::Interlaced { left: &left, right: &right });
    assert!(matches!(result, Err(Error::BackendError(_))));
}

/// Full-screen composition passes and their shaders
///
/// A composition pass reads the two eye targets and writes one image to the
/// output surface. The backend draws a full-screen triangle (3 vertices, no
/// vertex buffer) with `FULLSCREEN_VERTEX_GLSL` and the fragment shader
/// returned by `CompositePass::fragment_shader()`.
///
/// Bindings (set 0):
/// - binding 0: left eye target (`mapLeft`)
/// - binding 1: right eye target (`mapRight`)
/// - binding 2: `ColorMatrices` uniform block (anaglyph only, see `AnaglyphUniforms`)

use bytemuck::{Pod, Zeroable};
use glam::Mat3;
use crate::composite::ColorMixMatrix;

/// Full-screen triangle vertex shader shared by every composition pass
pub const FULLSCREEN_VERTEX_GLSL: &str = r#"#version 450
layout(location = 0) out vec2 vUv;

void main() {
    vUv = vec2((gl_VertexIndex << 1) & 2, gl_VertexIndex & 2);
    gl_Position = vec4(vUv * 2.0 - 1.0, 0.0, 1.0);
}
"#;

/// Row interlacing: odd rows from the left eye, even rows from the right eye
pub const INTERLACE_FRAGMENT_GLSL: &str = r#"#version 450
layout(set = 0, binding = 0) uniform sampler2D mapLeft;
layout(set = 0, binding = 1) uniform sampler2D mapRight;
layout(location = 0) in vec2 vUv;
layout(location = 0) out vec4 outColor;

void main() {
    if (mod(gl_FragCoord.y, 2.0) > 1.0) {
        outColor = texture(mapLeft, vUv);
    } else {
        outColor = texture(mapRight, vUv);
    }
}
"#;

/// Anaglyph mixing in linear space with sRGB decode/encode around it
pub const ANAGLYPH_FRAGMENT_GLSL: &str = r#"#version 450
layout(set = 0, binding = 0) uniform sampler2D mapLeft;
layout(set = 0, binding = 1) uniform sampler2D mapRight;
layout(set = 0, binding = 2, std140) uniform ColorMatrices {
    mat3 colorMatrixLeft;
    mat3 colorMatrixRight;
};
layout(location = 0) in vec2 vUv;
layout(location = 0) out vec4 outColor;

float lin(float c) {
    return c <= 0.04045 ? c * 0.0773993808 : pow(c * 0.9478672986 + 0.0521327014, 2.4);
}

vec4 lin(vec4 c) {
    return vec4(lin(c.r), lin(c.g), lin(c.b), c.a);
}

float dev(float c) {
    return c <= 0.0031308 ? c * 12.92 : pow(c, 0.41666) * 1.055 - 0.055;
}

void main() {
    vec4 colorL = lin(texture(mapLeft, vUv));
    vec4 colorR = lin(texture(mapRight, vUv));
    vec3 color = clamp(colorMatrixLeft * colorL.rgb + colorMatrixRight * colorR.rgb, 0.0, 1.0);
    outColor = vec4(dev(color.r), dev(color.g), dev(color.b), max(colorL.a, colorR.a));
}
"#;

/// std140 layout of the anaglyph `ColorMatrices` block
///
/// Each `mat3` is stored as three vec4-aligned columns.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct AnaglyphUniforms {
    pub color_matrix_left: [[f32; 4]; 3],
    pub color_matrix_right: [[f32; 4]; 3],
}

impl AnaglyphUniforms {
    /// Pack a left/right mixing matrix pair
    pub fn from_mix(mix: &ColorMixMatrix) -> Self {
        Self {
            color_matrix_left: std140_columns(&mix.left),
            color_matrix_right: std140_columns(&mix.right),
        }
    }

    /// Raw bytes, ready for a uniform buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

fn std140_columns(m: &Mat3) -> [[f32; 4]; 3] {
    [
        m.x_axis.extend(0.0).to_array(),
        m.y_axis.extend(0.0).to_array(),
        m.z_axis.extend(0.0).to_array(),
    ]
}

/// One full-screen composition pass over a pair of eye targets
#[derive(Debug)]
pub enum CompositePass<'a, T> {
    /// Alternate rows: `row mod 2 != 0` samples `left`, other rows sample `right`
    Interlaced {
        left: &'a T,
        right: &'a T,
    },
    /// Color-filtered anaglyph: `mix.left * lin(left) + mix.right * lin(right)`
    Anaglyph {
        left: &'a T,
        right: &'a T,
        mix: ColorMixMatrix,
    },
}

impl<'a, T> CompositePass<'a, T> {
    /// Target bound as `mapLeft`
    pub fn left(&self) -> &'a T {
        match self {
            CompositePass::Interlaced { left, .. } => *left,
            CompositePass::Anaglyph { left, .. } => *left,
        }
    }

    /// Target bound as `mapRight`
    pub fn right(&self) -> &'a T {
        match self {
            CompositePass::Interlaced { right, .. } => *right,
            CompositePass::Anaglyph { right, .. } => *right,
        }
    }

    /// Fragment shader source for this pass
    pub fn fragment_shader(&self) -> &'static str {
        match self {
            CompositePass::Interlaced { .. } => INTERLACE_FRAGMENT_GLSL,
            CompositePass::Anaglyph { .. } => ANAGLYPH_FRAGMENT_GLSL,
        }
    }

    /// Uniform block contents (binding 2), if the pass has one
    pub fn uniforms(&self) -> Option<AnaglyphUniforms> {
        match self {
            CompositePass::Interlaced { .. } => None,
            CompositePass::Anaglyph { mix, .. } => Some(AnaglyphUniforms::from_mix(mix)),
        }
    }
}

#[cfg(test)]
#[path = "composite_pass_tests.rs"]
mod tests;

/// Color transfer functions and anaglyph mixing matrices

use glam::{Mat3, Vec3, Vec4};

/// Approximate sRGB decode of one channel (stored value to linear light)
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c * 0.077_399_38
    } else {
        (c * 0.947_867_3 + 0.052_132_7).powf(2.4)
    }
}

/// Approximate sRGB encode of one channel (linear light to stored value)
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        c.powf(0.41666) * 1.055 - 0.055
    }
}

/// Decode the color channels of an RGBA value, alpha untouched
pub fn decode_rgba(color: Vec4) -> Vec4 {
    Vec4::new(
        srgb_to_linear(color.x),
        srgb_to_linear(color.y),
        srgb_to_linear(color.z),
        color.w,
    )
}

/// Encode a linear RGB value
pub fn encode_rgb(color: Vec3) -> Vec3 {
    Vec3::new(
        linear_to_srgb(color.x),
        linear_to_srgb(color.y),
        linear_to_srgb(color.z),
    )
}

/// Named anaglyph color filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnaglyphPreset {
    /// Dubois least-squares red/cyan matrices
    Color,
    /// Pure red for the left eye, green and blue for the right eye
    RedCyan,
    /// Luminance of each eye sent to the red / cyan channels
    #[default]
    Gray,
}

impl AnaglyphPreset {
    /// Preset from its short name; anything unrecognized selects `Gray`
    pub fn from_name(name: &str) -> Self {
        match name {
            "color" => AnaglyphPreset::Color,
            "redcyan" => AnaglyphPreset::RedCyan,
            _ => AnaglyphPreset::Gray,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnaglyphPreset::Color => "color",
            AnaglyphPreset::RedCyan => "redcyan",
            AnaglyphPreset::Gray => "gray",
        }
    }
}

/// Column-major 3x3 matrices applied to the linear RGB of each eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMixMatrix {
    pub left: Mat3,
    pub right: Mat3,
}

impl ColorMixMatrix {
    pub fn for_preset(preset: AnaglyphPreset) -> Self {
        match preset {
            AnaglyphPreset::Color => Self {
                left: Mat3::from_cols_array(&[
                    1.067_168, -0.001_643_599_2, 0.000_177_753_7,
                    -0.028_107_794, -0.000_195_934, -0.000_287_539_7,
                    -0.042_790_9, 0.000_015_809_757, -0.000_242_871_2,
                ]),
                right: Mat3::from_cols_array(&[
                    -0.035_534_084, -0.064_403_07, 0.018_319_188,
                    -0.102_690_23, 0.807_972_7, -0.048_358_306,
                    0.000_122_499_27, -0.009_558_862, 0.567_823_6,
                ]),
            },
            AnaglyphPreset::RedCyan => Self {
                left: Mat3::from_cols_array(&[
                    1.0, 0.0, 0.0,
                    0.0, 0.0, 0.0,
                    0.0, 0.0, 0.0,
                ]),
                right: Mat3::from_cols_array(&[
                    0.0, 0.0, 0.0,
                    0.0, 1.0, 0.0,
                    0.0, 0.0, 1.0,
                ]),
            },
            // Each column is one input channel: luminance weights land in
            // red for the left eye and in green + blue for the right eye
            AnaglyphPreset::Gray => Self {
                left: Mat3::from_cols_array(&[
                    0.299, 0.0, 0.0,
                    0.587, 0.0, 0.0,
                    0.114, 0.0, 0.0,
                ]),
                right: Mat3::from_cols_array(&[
                    0.0, 0.299, 0.299,
                    0.0, 0.587, 0.587,
                    0.0, 0.114, 0.114,
                ]),
            },
        }
    }

    /// Combine one pixel of each eye
    ///
    /// Both inputs are stored (sRGB-encoded) values. The result is encoded
    /// again; its alpha is the larger of the two input alphas.
    pub fn mix(&self, left: Vec4, right: Vec4) -> Vec4 {
        let left_linear = decode_rgba(left);
        let right_linear = decode_rgba(right);

        let color = (self.left * left_linear.truncate() + self.right * right_linear.truncate())
            .clamp(Vec3::ZERO, Vec3::ONE);

        encode_rgb(color).extend(left_linear.w.max(right_linear.w))
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;

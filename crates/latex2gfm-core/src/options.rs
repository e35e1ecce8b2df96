//! Configuration options for GFM conversion

/// Math rendering style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MathStyle {
    /// Pass math content through verbatim; GFM math spans carry raw LaTeX
    #[default]
    Passthrough,
    /// Render each math fragment as an image link against a LaTeX
    /// rendering endpoint
    Image,
}

/// Options for GFM conversion
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Math rendering style
    pub math_style: MathStyle,

    /// Endpoint used by [`MathStyle::Image`]; the percent-encoded math
    /// source is appended to this string
    pub image_endpoint: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            math_style: MathStyle::Passthrough,
            image_endpoint: "http://latex.codecogs.com/gif.latex?".to_string(),
        }
    }
}

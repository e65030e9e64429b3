/// Rejected mask configuration. Each variant names the offending field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("inverted range for {field}: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("{field} = {value} is outside {lo}..={hi}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        lo: f32,
        hi: f32,
    },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("smoothing factor {field} = {value} must be in (0, 1]")]
    SmoothingFactor { field: &'static str, value: f32 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("image has zero size ({width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("image of {width}x{height} does not fit in memory")]
    TooLarge { width: u32, height: u32 },

    #[error("expected {expected} RGBA bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

use serde::Deserialize;

/// How positions with more than two elements are treated.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtraDimensions {
    /// A position must be exactly `[lon, lat]`.
    Reject,
    /// Numeric elements after `[lon, lat]`, such as an altitude, are dropped.
    Ignore,
}

impl Default for ExtraDimensions {
    fn default() -> Self {
        ExtraDimensions::Reject
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DecodeOptions {
    pub extra_dimensions: ExtraDimensions,
}

impl DecodeOptions {
    pub fn extra_dimensions(mut self, extra_dimensions: ExtraDimensions) -> Self {
        self.extra_dimensions = extra_dimensions;
        self
    }
}

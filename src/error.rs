use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Endpoint or credential configuration is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Non-success response from the data provider.
    ///
    /// Displays as the provider-supplied message only, so page shells can
    /// surface it verbatim.
    #[error("{message}")]
    Fetch { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed sample at index {index}: {reason}")]
    MalformedSample { index: usize, reason: String },

    #[error("decode error: {0}")]
    Decode(String),
}

impl ChartError {
    /// Returns `true` for errors raised at the data-provider boundary.
    #[must_use]
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_)
                | Self::Fetch { .. }
                | Self::Transport(_)
                | Self::MalformedSample { .. }
                | Self::Decode(_)
        )
    }
}

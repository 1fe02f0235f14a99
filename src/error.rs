use thiserror::Error;

pub type ScaleChartResult<T> = Result<T, ScaleChartError>;

#[derive(Debug, Error)]
pub enum ScaleChartError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("plugin with id `{0}` is already registered")]
    DuplicatePluginId(String),

    #[error("invalid config json: {0}")]
    InvalidConfigJson(String),
}

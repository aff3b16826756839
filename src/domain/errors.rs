/// Dashboard error type. Every failure ends in the chart page's status line
/// or the console.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Bundled dataset could not be read, or yielded nothing usable.
    Dataset(String),
    /// Chart description could not be handed to the rendering backend.
    Rendering(String),
    /// Page configuration was malformed.
    Configuration(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Dataset(msg) => write!(f, "Dataset Error: {}", msg),
            AppError::Rendering(msg) => write!(f, "Rendering Error: {}", msg),
            AppError::Configuration(msg) => write!(f, "Configuration Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Dataset(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Configuration(err.to_string())
    }
}

pub type DashboardResult<T> = Result<T, AppError>;

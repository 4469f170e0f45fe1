use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("the uploaded file is empty")]
    EmptyInput,

    #[error("could not open workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("missing sheet '{0}'")]
    MissingSheet(String),

    #[error("expected at least 2 columns, found {0}")]
    TooFewColumns(usize),

    #[error("sheet '{sheet}': {source}")]
    InSheet {
        sheet: String,
        #[source]
        source: Box<ReportError>,
    },

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl ReportError {
    /// True for failures to turn the uploaded bytes into the two account tables.
    pub fn is_input_read(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::Workbook(_)
                | Self::MissingSheet(_)
                | Self::TooFewColumns(_)
                | Self::InSheet { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

//! Error enum
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// the archive or one of its parts could not be parsed.
    Docx(docx_rs::ReaderError),
    Custom(String),
    Serde(serde_json::Error),
    Regex(regex::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Http(reqwest::Error),
    /// Unexpected answer from the morphological analysis service.
    Lattice(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io: {}", e),
            Error::Docx(e) => write!(f, "docx: {}", e),
            Error::Custom(s) => write!(f, "{}", s),
            Error::Serde(e) => write!(f, "json: {}", e),
            Error::Regex(e) => write!(f, "regex: {}", e),
            Error::Glob(e) => write!(f, "glob: {}", e),
            Error::GlobPattern(e) => write!(f, "glob pattern: {}", e),
            Error::Http(e) => write!(f, "http: {}", e),
            Error::Lattice(s) => write!(f, "lattice: {}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<docx_rs::ReaderError> for Error {
    fn from(e: docx_rs::ReaderError) -> Error {
        Error::Docx(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Error {
        Error::Regex(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

use std::{error, fmt::Display, io};

#[derive(Debug)]
pub enum Error {
    /// The input could not be opened or read
    Source(io::Error),
    /// The input is not a valid extended m3u playlist
    Format(FormatError),
    /// The output could not be written or flushed
    Sink(io::Error),
}

impl Error {
    pub fn is_source(&self) -> bool {
        matches!(self, Self::Source(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    pub fn is_sink(&self) -> bool {
        matches!(self, Self::Sink(_))
    }

    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(_) => write!(f, "Unable to open playlist source"),
            Self::Format(e) => e.fmt(f),
            Self::Sink(e) => write!(f, "Unable to write playlist: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Source(e) | Self::Sink(e) => Some(e),
            Self::Format(e) => Some(e),
        }
    }
}

impl From<FormatError> for Error {
    fn from(value: FormatError) -> Self {
        Self::Format(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// 1-based line number
    pub line: usize,
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub fn new(line: usize, kind: FormatErrorKind) -> Self {
        Self { line, kind }
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl error::Error for FormatError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    MissingHeader,
    MalformedMetadata,
    InvalidLength { found: String },
    GroupWithoutTrack,
    UriWithoutTrack,
}

impl Display for FormatErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "Missing playlist header, expected #EXTM3U"),
            Self::MalformedMetadata => write!(f, "Malformed metadata: missing length or name"),
            Self::InvalidLength { found } => write!(f, "Invalid length \"{}\"", found),
            Self::GroupWithoutTrack => write!(f, "Group line with no preceding track"),
            Self::UriWithoutTrack => write!(f, "URI before any track"),
        }
    }
}

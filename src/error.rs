// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Ingestion(IngestionError),
    Generation(GenerationError),
}

/// Failures while turning a raw capture into an image record.
///
/// The user sees a single "could not read the file" message for every
/// variant; the detail only goes to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestionError {
    /// The source could not be read (missing file, permission, empty data).
    ReadFailure(String),

    /// A data URL was malformed or its base64 body did not decode.
    MalformedDataUrl(String),

    /// The camera could not produce a frame.
    Device(DeviceError),
}

impl IngestionError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            IngestionError::ReadFailure(_) | IngestionError::MalformedDataUrl(_) => {
                "notification-read-error"
            }
            IngestionError::Device(err) => err.i18n_key(),
        }
    }
}

/// Camera acquisition and capture failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The user or the platform refused access.
    PermissionDenied,

    /// No capture device is available.
    NoDevice,

    /// The device stopped delivering frames or failed to start.
    Other(String),
}

impl DeviceError {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DeviceError::PermissionDenied => "notification-camera-permission",
            DeviceError::NoDevice => "notification-camera-unavailable",
            DeviceError::Other(_) => "notification-camera-error",
        }
    }
}

/// Failures reported by a composite generation backend.
///
/// None of these ever reach the user verbatim: the orchestrator logs them
/// and collapses them into the generic failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No credential was configured for the direct backend.
    MissingApiKey(String),

    /// The request never completed (DNS, TLS, connection reset, timeout).
    Transport(String),

    /// The service answered with a non-success status.
    Status { code: u16, message: String },

    /// The response body was not what the backend expects.
    MalformedResponse(String),
}

impl fmt::Display for IngestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestionError::ReadFailure(msg) => write!(f, "Read failure: {}", msg),
            IngestionError::MalformedDataUrl(msg) => write!(f, "Malformed data URL: {}", msg),
            IngestionError::Device(err) => write!(f, "Camera error: {}", err),
        }
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::PermissionDenied => write!(f, "Camera permission denied"),
            DeviceError::NoDevice => write!(f, "No camera available"),
            DeviceError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::MissingApiKey(var) => {
                write!(f, "No API key found in environment variable {}", var)
            }
            GenerationError::Transport(msg) => write!(f, "Transport error: {}", msg),
            GenerationError::Status { code, message } => {
                write!(f, "Service returned status {}: {}", code, message)
            }
            GenerationError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Ingestion(e) => write!(f, "Ingestion Error: {}", e),
            Error::Generation(e) => write!(f, "Generation Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for IngestionError {}
impl std::error::Error for DeviceError {}
impl std::error::Error for GenerationError {}

impl From<DeviceError> for IngestionError {
    fn from(err: DeviceError) -> Self {
        IngestionError::Device(err)
    }
}

impl From<IngestionError> for Error {
    fn from(err: IngestionError) -> Self {
        Error::Ingestion(err)
    }
}

impl From<GenerationError> for Error {
    fn from(err: GenerationError) -> Self {
        Error::Generation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GenerationError::MalformedResponse(err.to_string())
        } else {
            GenerationError::Transport(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn device_error_wraps_into_ingestion_error() {
        let err: IngestionError = DeviceError::NoDevice.into();
        assert_eq!(err, IngestionError::Device(DeviceError::NoDevice));
        assert_eq!(err.i18n_key(), "notification-camera-unavailable");
    }

    #[test]
    fn read_failures_share_one_message_key() {
        assert_eq!(
            IngestionError::ReadFailure("gone".into()).i18n_key(),
            IngestionError::MalformedDataUrl("bad".into()).i18n_key()
        );
    }

    #[test]
    fn status_error_display_includes_code() {
        let err = GenerationError::Status {
            code: 503,
            message: "overloaded".into(),
        };
        assert_eq!(
            format!("{}", err),
            "Service returned status 503: overloaded"
        );
    }
}

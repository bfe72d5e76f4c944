use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use aws_sdk_s3::operation::put_object::PutObjectError;
use aws_sdk_s3::primitives::ByteStreamError;
use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("context canceled"))]
    Canceled,

    #[snafu(display("context deadline exceeded"))]
    DeadlineExceeded,

    #[snafu(display("failed to list objects with prefix '{prefix}': {source}"))]
    ListObjects {
        prefix: String,
        source: SdkError<ListObjectsV2Error>,
    },

    #[snafu(display("failed to list objects with prefix '{prefix}': receiver dropped"))]
    ListingSinkClosed { prefix: String },

    #[snafu(display("failed to download object '{path}': {source}"))]
    DownloadObject {
        path: String,
        source: SdkError<GetObjectError>,
    },

    #[snafu(display("failed to download object '{path}': {source}"))]
    ReadObjectBody {
        path: String,
        source: ByteStreamError,
    },

    #[snafu(display("failed to upload object '{path}': {source}"))]
    UploadObject {
        path: String,
        source: SdkError<PutObjectError>,
    },

    #[snafu(display("Environment variable '{key}' is required but not found"))]
    MissingEnvVar { key: String },

    #[snafu(display("Invalid storage configuration: {reason}"))]
    InvalidConfig { reason: String },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl Error {
    /// Whether this is the calling context's own error rather than an
    /// operation failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Error::Canceled | Error::DeadlineExceeded)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}

use aws_sdk_route53::error::SdkError;
use aws_smithy_types::error::{display::DisplayErrorContext, metadata::ProvideErrorMetadata};

/// What went wrong talking to Route53, grouped by what a caller can do about it.
#[derive(Debug, thiserror::Error)]
pub enum Route53Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("transient failure: {0}")]
    Transient(String),
    #[error("service error {code}: {message}")]
    Service { code: String, message: String },
    #[error("failed to build request: {0}")]
    Build(#[from] aws_smithy_types::error::operation::BuildError),
}

impl Route53Error {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Route53Error::Transient(_))
    }

    /// Maps a Route53 (or STS/IAM style) error code onto an error kind.
    pub fn from_code(code: Option<&str>, message: Option<&str>) -> Route53Error {
        let message = message.unwrap_or_default().to_string();
        let Some(code) = code else {
            return Route53Error::Service {
                code: String::from("Unknown"),
                message,
            };
        };

        let detail = if message.is_empty() { code.to_string() } else { format!("{code}: {message}") };

        match code {
            "InvalidDomainName" | "InvalidInput" | "InvalidArgument" | "InvalidChangeBatch" | "InvalidVPCId"
            | "NoSuchDelegationSet" | "ValidationError" => Route53Error::InvalidInput(detail),
            "NoSuchHostedZone" | "HostedZoneNotFound" => Route53Error::NotFound(detail),
            "HostedZoneAlreadyExists" | "ConflictingDomainExists" | "DelegationSetNotAvailable" | "TooManyHostedZones" => {
                Route53Error::Conflict(detail)
            }
            "AccessDenied" | "AccessDeniedException" | "InvalidClientTokenId" | "UnrecognizedClientException"
            | "ExpiredToken" | "SignatureDoesNotMatch" => Route53Error::PermissionDenied(detail),
            "Throttling" | "ThrottlingException" | "PriorRequestNotComplete" | "ServiceUnavailable" => {
                Route53Error::Transient(detail)
            }
            _ => Route53Error::Service {
                code: code.to_string(),
                message,
            },
        }
    }
}

impl<E, R> From<SdkError<E, R>> for Route53Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    fn from(err: SdkError<E, R>) -> Self {
        match &err {
            SdkError::ServiceError(context) => {
                let service_err = context.err();
                Route53Error::from_code(service_err.code(), service_err.message())
            }
            SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
                Route53Error::Transient(DisplayErrorContext(&err).to_string())
            }
            _ => Route53Error::Service {
                code:    String::from("Unknown"),
                message: DisplayErrorContext(&err).to_string(),
            },
        }
    }
}

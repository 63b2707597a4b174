use thiserror::Error;

/// Why a credential lookup came back empty.
///
/// None of these are fatal. `resolve` collapses all of them into `None`,
/// `try_resolve` reports them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    #[error("no auths section in the config document")]
    MissingSection,

    #[error("no auths entry matches the hostname")]
    NoMatch,

    #[error("matched auths entry has no auth field")]
    MissingAuthField,

    #[error("matched auths entry has an empty auth field")]
    EmptyAuthField,

    #[error("auth field is not valid base64")]
    MalformedBase64,

    #[error("decoded auth field is not a username:password pair")]
    MalformedPayload,
}

impl LookupFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingSection => "missing_section",
            Self::NoMatch => "no_match",
            Self::MissingAuthField => "missing_auth_field",
            Self::EmptyAuthField => "empty_auth_field",
            Self::MalformedBase64 => "malformed_base64",
            Self::MalformedPayload => "malformed_payload",
        }
    }
}

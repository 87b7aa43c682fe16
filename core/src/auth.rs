//! Authentication parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Maximum length of an authentication secret.
pub const MAX_PASSWORD_LEN: usize = 254;

/// How the secret is carried in protocol messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordType {
    ClearText,
    HmacMd5,
}

impl PasswordType {
    pub fn as_str(self) -> &'static str {
        match self {
            PasswordType::ClearText => "clear",
            PasswordType::HmacMd5 => "md5",
        }
    }
}

impl fmt::Display for PasswordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" | "clear-text" => Ok(PasswordType::ClearText),
            "md5" | "hmac-md5" => Ok(PasswordType::HmacMd5),
            other => Err(CoreError::unknown_enum("password-type", other)),
        }
    }
}

/// Whether sequence-number PDUs are authenticated too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SnpAuth {
    #[default]
    None,
    SendOnly,
    Validate,
}

impl SnpAuth {
    pub fn as_str(self) -> &'static str {
        match self {
            SnpAuth::None => "none",
            SnpAuth::SendOnly => "send-only",
            SnpAuth::Validate => "validate",
        }
    }
}

impl fmt::Display for SnpAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnpAuth {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SnpAuth::None),
            "send-only" => Ok(SnpAuth::SendOnly),
            "validate" => Ok(SnpAuth::Validate),
            other => Err(CoreError::unknown_enum("authenticate-snp", other)),
        }
    }
}

/// A complete password configuration, always replaced as a whole.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    pub kind: PasswordType,
    pub secret: String,
    pub snp_auth: SnpAuth,
}

impl Password {
    pub fn new(kind: PasswordType, secret: impl Into<String>, snp_auth: SnpAuth) -> Self {
        Self {
            kind,
            secret: secret.into(),
            snp_auth,
        }
    }
}

// Keep secrets out of debug logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("kind", &self.kind)
            .field("secret", &"<redacted>")
            .field("snp_auth", &self.snp_auth)
            .finish()
    }
}

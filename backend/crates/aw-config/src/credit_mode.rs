use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the ledger endpoint decides whether a credit request is trusted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditMode {
    /// Any caller may credit any uid
    #[default]
    Open,
    /// Caller must hold the uid's session and a redeemable watch ticket
    Verified,
}

impl CreditMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Verified => "verified",
        }
    }
}

impl fmt::Display for CreditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreditMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "verified" => Ok(Self::Verified),
            other => Err(format!("unknown credit mode '{other}'")),
        }
    }
}

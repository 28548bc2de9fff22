use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The deployment environment a session presents in its UI and logs.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development.
    #[default]
    Local,
    /// Pre-production staging.
    Staging,
    /// Production.
    Production,
}

impl Environment {
    /// Returns the sign-in portal URL associated with the environment.
    ///
    /// Display-only for now. Nothing is contacted; the authentication call is
    /// simulated locally.
    pub fn portal_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:4200".to_string(),
            Environment::Staging => "https://staging.portal.example.com".to_string(),
            Environment::Production => "https://portal.example.com".to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Staging => write!(f, "Staging"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.portal_url())
    }
}

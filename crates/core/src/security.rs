//! Security configuration descriptors.
//!
//! Each descriptor is an immutable value that renders itself as a
//! Groovy fragment binding a well-known variable (`securityRealm` or
//! `authorizationStrategy`). The variants form a closed set: adding a
//! supported realm or strategy means adding a variant here.

/// How users authenticate against the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityRealm {
    /// Jenkins' own user database.
    HudsonPrivate {
        /// Whether the self-signup page is enabled.
        allow_signup: bool,
    },
    /// Delegates authentication to the servlet container.
    Legacy,
}

impl SecurityRealm {
    /// Groovy fragment binding this realm to the `securityRealm` variable.
    pub fn groovy(&self) -> String {
        match self {
            Self::HudsonPrivate { allow_signup } => {
                format!("def securityRealm = new HudsonPrivateSecurityRealm({allow_signup})")
            }
            Self::Legacy => "def securityRealm = new LegacySecurityRealm()".to_string(),
        }
    }
}

/// Permission rules applied once users are authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationStrategy {
    /// Any logged-in user has full control.
    FullControlOnceLoggedIn,
    /// No access control at all.
    Unsecured,
}

impl AuthorizationStrategy {
    /// Groovy fragment binding this strategy to the `authorizationStrategy` variable.
    pub fn groovy(&self) -> String {
        match self {
            Self::FullControlOnceLoggedIn => {
                "def authorizationStrategy = new FullControlOnceLoggedInAuthorizationStrategy()"
                    .to_string()
            }
            Self::Unsecured => {
                "def authorizationStrategy = new AuthorizationStrategy.Unsecured()".to_string()
            }
        }
    }
}

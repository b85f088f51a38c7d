//! Groovy script templating for the Jenkins script console.
//!
//! Every script this library submits is built here from fixed,
//! compile-time templates. Caller-supplied names pass through
//! [`escape`] before being embedded in single-quoted Groovy string
//! literals, so a name can never terminate the literal or alter the
//! surrounding script.

use crate::security::{AuthorizationStrategy, SecurityRealm};

/// Import statement prepended to security configuration scripts.
const IMPORT_HUDSON_SECURITY: &str = "import hudson.security.*";

/// Binds the running Jenkins singleton to a local variable.
const JENKINS_INSTANCE: &str = "def jenkins = Jenkins.instance";

/// Applies the realm bound by a [`SecurityRealm`] fragment.
const SET_SECURITY_REALM: &str = "jenkins.setSecurityRealm(securityRealm)";

/// Applies the strategy bound by an [`AuthorizationStrategy`] fragment.
const SET_AUTHORIZATION_STRATEGY: &str = "jenkins.setAuthorizationStrategy(authorizationStrategy)";

/// Persists the updated configuration to disk.
const JENKINS_SAVE: &str = "jenkins.save()";

/// Escape a name for use inside a Groovy single-quoted string literal.
///
/// Backslashes are doubled and single quotes are backslash-escaped.
pub fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Script printing the server's version string.
pub fn print_version() -> String {
    "println(Jenkins.instance.version)".to_string()
}

/// Script printing the name of the view `view`.
///
/// Prints nothing when the view does not exist, which is how the
/// existence check distinguishes presence from absence.
pub fn print_view_name(view: &str) -> String {
    format!("println(Jenkins.instance.getView('{}').name)", escape(view))
}

/// Script printing the name of the job `job`.
pub fn print_job_name(job: &str) -> String {
    format!("println(Jenkins.instance.getItem('{}').name)", escape(job))
}

/// Script registering a new list view named `view`.
pub fn add_view(view: &str) -> String {
    format!("Jenkins.instance.addView(new ListView('{}'))", escape(view))
}

/// Script adding the job `job` to the view `view`.
pub fn add_job_to_view(view: &str, job: &str) -> String {
    format!(
        "Jenkins.instance.getView('{}').add(Jenkins.instance.getItem('{}'))",
        escape(view),
        escape(job)
    )
}

/// Full script applying `realm` as the server's security realm.
pub fn set_security_realm(realm: &SecurityRealm) -> String {
    join_lines(&[
        IMPORT_HUDSON_SECURITY,
        &realm.groovy(),
        JENKINS_INSTANCE,
        SET_SECURITY_REALM,
        JENKINS_SAVE,
    ])
}

/// Full script applying `strategy` as the server's authorization strategy.
pub fn set_authorization_strategy(strategy: &AuthorizationStrategy) -> String {
    join_lines(&[
        IMPORT_HUDSON_SECURITY,
        &strategy.groovy(),
        JENKINS_INSTANCE,
        SET_AUTHORIZATION_STRATEGY,
        JENKINS_SAVE,
    ])
}

/// Join script fragments with newline separators.
fn join_lines(fragments: &[&str]) -> String {
    fragments.join("\n")
}

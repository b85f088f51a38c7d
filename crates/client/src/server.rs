//! High-level Jenkins administration operations.
//!
//! [`JenkinsServer`] composes Groovy scripts and XML payloads from the
//! core templates, submits them through [`JenkinsApi`], and maps the
//! responses to typed domain errors. The handle is stateless: whether
//! a job or view exists is re-queried from the server on every check,
//! never cached, so an existence check followed by a mutation is not
//! atomic with respect to other administrators.

use jenkinsctl_core::error::CoreError;
use jenkinsctl_core::groovy;
use jenkinsctl_core::job_config::JobConfig;
use jenkinsctl_core::security::{AuthorizationStrategy, SecurityRealm};
use jenkinsctl_core::types::{ItemKind, Job, ListView};

use crate::api::{ApiError, JenkinsApi};
use crate::config::JenkinsConfig;

/// Errors surfaced by [`JenkinsServer`] operations.
///
/// Transport failures are always wrapped before crossing the library
/// boundary; callers never see raw `reqwest` errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A domain-level failure: absent entity, duplicate name, or a
    /// creation that could not be verified.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The job configuration document could not be serialized.
    #[error("Job configuration serialization failed: {0}")]
    JobConfig(#[from] quick_xml::DeError),

    /// The HTTP layer failed (network error or non-2xx response).
    #[error("Transport error: {0}")]
    Transport(#[from] ApiError),
}

/// Convenience alias for operation return values.
pub type ServerResult<T> = Result<T, ServerError>;

/// Handle for administering one Jenkins server.
pub struct JenkinsServer {
    api: JenkinsApi,
}

impl JenkinsServer {
    /// Create a server handle from connection configuration.
    pub fn new(config: JenkinsConfig) -> Self {
        Self {
            api: JenkinsApi::new(config.base_url, config.credentials),
        }
    }

    /// Create a server handle over an existing [`JenkinsApi`].
    pub fn with_api(api: JenkinsApi) -> Self {
        Self { api }
    }

    /// Execute a Groovy script on the script console.
    ///
    /// Returns the raw console output (whatever the script printed).
    pub async fn execute_script(&self, script: &str) -> ServerResult<String> {
        tracing::debug!(bytes = script.len(), "Submitting script to console");
        Ok(self.api.run_script(script).await?)
    }

    /// Version string reported by the server, trimmed of the trailing
    /// newline the console appends to `println` output.
    pub async fn version(&self) -> ServerResult<String> {
        let output = self.execute_script(&groovy::print_version()).await?;
        Ok(output.trim_end().to_string())
    }

    /// Look up the view named `name`.
    ///
    /// The console prints the view's name attribute; output that is
    /// empty after trimming means the view does not exist.
    pub async fn view_by_name(&self, name: &str) -> ServerResult<ListView> {
        let output = self.execute_script(&groovy::print_view_name(name)).await?;
        if output.trim().is_empty() {
            return Err(CoreError::NotFound {
                kind: ItemKind::View,
                name: name.to_string(),
            }
            .into());
        }
        Ok(ListView::new(name))
    }

    /// Whether the view named `name` exists on the server.
    ///
    /// Only a missing view maps to `Ok(false)`; transport failures
    /// propagate instead of masquerading as absence.
    pub async fn view_exists(&self, name: &str) -> ServerResult<bool> {
        match self.view_by_name(name).await {
            Ok(_) => Ok(true),
            Err(ServerError::Core(CoreError::NotFound { .. })) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Create a list view named `name`.
    ///
    /// Fails with [`CoreError::AlreadyExists`] when the name is taken,
    /// and with [`CoreError::CreationFailed`] when the view cannot be
    /// observed after the creation script ran.
    pub async fn create_view(&self, name: &str) -> ServerResult<()> {
        if self.view_exists(name).await? {
            return Err(CoreError::AlreadyExists {
                kind: ItemKind::View,
                name: name.to_string(),
            }
            .into());
        }

        self.execute_script(&groovy::add_view(name)).await?;

        if !self.view_exists(name).await? {
            return Err(CoreError::CreationFailed {
                kind: ItemKind::View,
                name: name.to_string(),
            }
            .into());
        }

        tracing::info!(view = %name, "Created view");
        Ok(())
    }

    /// Look up the job named `name`.
    pub async fn job_by_name(&self, name: &str) -> ServerResult<Job> {
        let output = self.execute_script(&groovy::print_job_name(name)).await?;
        if output.trim().is_empty() {
            return Err(CoreError::NotFound {
                kind: ItemKind::Job,
                name: name.to_string(),
            }
            .into());
        }
        Ok(Job::new(name))
    }

    /// Whether the job named `name` exists on the server.
    ///
    /// Only a missing job maps to `Ok(false)`; transport failures
    /// propagate instead of masquerading as absence.
    pub async fn job_exists(&self, name: &str) -> ServerResult<bool> {
        match self.job_by_name(name).await {
            Ok(_) => Ok(true),
            Err(ServerError::Core(CoreError::NotFound { .. })) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Create a free-style job named `name` from the default configuration.
    ///
    /// The `config.xml` document is POSTed to the item-creation
    /// endpoint; when the name is already taken no creation request is
    /// issued. Afterwards the job's existence is verified through the
    /// script console, failing with [`CoreError::CreationFailed`] if
    /// the job did not appear.
    pub async fn create_job(&self, name: &str) -> ServerResult<()> {
        if self.job_exists(name).await? {
            return Err(CoreError::AlreadyExists {
                kind: ItemKind::Job,
                name: name.to_string(),
            }
            .into());
        }

        let config_xml = JobConfig::default().to_xml()?;
        self.api.create_item(name, config_xml).await?;

        if !self.job_exists(name).await? {
            return Err(CoreError::CreationFailed {
                kind: ItemKind::Job,
                name: name.to_string(),
            }
            .into());
        }

        tracing::info!(job = %name, "Created job");
        Ok(())
    }

    /// Add the job `job_name` to the view `view_name`.
    ///
    /// Both entities must already exist; the add script is never sent
    /// when a precondition fails.
    pub async fn add_job_to_view(&self, view_name: &str, job_name: &str) -> ServerResult<()> {
        if !self.view_exists(view_name).await? {
            return Err(CoreError::NotFound {
                kind: ItemKind::View,
                name: view_name.to_string(),
            }
            .into());
        }
        if !self.job_exists(job_name).await? {
            return Err(CoreError::NotFound {
                kind: ItemKind::Job,
                name: job_name.to_string(),
            }
            .into());
        }

        self.execute_script(&groovy::add_job_to_view(view_name, job_name))
            .await?;

        tracing::info!(view = %view_name, job = %job_name, "Added job to view");
        Ok(())
    }

    /// Replace the server's security realm.
    ///
    /// Composes the import, the realm's own fragment, the instance
    /// accessor, the setter, and the save statement into one script.
    /// Returns the raw console output; there is no post-verification.
    pub async fn set_security_realm(&self, realm: &SecurityRealm) -> ServerResult<String> {
        let output = self
            .execute_script(&groovy::set_security_realm(realm))
            .await?;
        tracing::info!(?realm, "Applied security realm");
        Ok(output)
    }

    /// Replace the server's authorization strategy.
    ///
    /// Same composition as [`set_security_realm`](Self::set_security_realm);
    /// no post-verification.
    pub async fn set_authorization_strategy(
        &self,
        strategy: &AuthorizationStrategy,
    ) -> ServerResult<String> {
        let output = self
            .execute_script(&groovy::set_authorization_strategy(strategy))
            .await?;
        tracing::info!(?strategy, "Applied authorization strategy");
        Ok(output)
    }
}

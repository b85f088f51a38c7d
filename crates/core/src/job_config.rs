//! Default job descriptor rendered to Jenkins `config.xml`.
//!
//! [`JobConfig`] is the typed form of the minimal free-style project
//! configuration submitted on job creation. It is serialized with
//! `quick-xml` and POSTed as the body of the create-item request.

use quick_xml::DeError;
use serde::Serialize;

/// Declaration prepended to the serialized document.
const XML_DECLARATION: &str = "<?xml version='1.0' encoding='UTF-8'?>\n";

/// SCM class used when a job has no source control configured.
const NULL_SCM: &str = "hudson.scm.NullSCM";

/// Minimal free-style project configuration.
///
/// The defaults mirror what the Jenkins UI produces for an empty
/// free-style job: no SCM, no triggers, no build steps, enabled,
/// non-concurrent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename = "project")]
pub struct JobConfig {
    description: String,
    #[serde(rename = "keepDependencies")]
    keep_dependencies: bool,
    properties: Empty,
    scm: Scm,
    #[serde(rename = "canRoam")]
    can_roam: bool,
    disabled: bool,
    #[serde(rename = "blockBuildWhenDownstreamBuilding")]
    block_build_when_downstream_building: bool,
    #[serde(rename = "blockBuildWhenUpstreamBuilding")]
    block_build_when_upstream_building: bool,
    triggers: Empty,
    #[serde(rename = "concurrentBuild")]
    concurrent_build: bool,
    builders: Empty,
    publishers: Empty,
    #[serde(rename = "buildWrappers")]
    build_wrappers: Empty,
}

/// Marker for container elements that serialize as `<tag/>`.
#[derive(Debug, Clone, Serialize)]
struct Empty;

#[derive(Debug, Clone, Serialize)]
struct Scm {
    #[serde(rename = "@class")]
    class: &'static str,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            description: String::new(),
            keep_dependencies: false,
            properties: Empty,
            scm: Scm { class: NULL_SCM },
            can_roam: true,
            disabled: false,
            block_build_when_downstream_building: false,
            block_build_when_upstream_building: false,
            triggers: Empty,
            concurrent_build: false,
            builders: Empty,
            publishers: Empty,
            build_wrappers: Empty,
        }
    }
}

impl JobConfig {
    /// Default configuration with a description attached.
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Render the `config.xml` document.
    pub fn to_xml(&self) -> Result<String, DeError> {
        let body = quick_xml::se::to_string(self)?;
        Ok(format!("{XML_DECLARATION}{body}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_renders_project_document() {
        let xml = JobConfig::default().to_xml().expect("serialization should succeed");

        assert!(xml.starts_with("<?xml version='1.0' encoding='UTF-8'?>\n"));
        assert!(xml.contains("<project>"));
        assert!(xml.ends_with("</project>"));
    }

    #[test]
    fn default_config_uses_null_scm() {
        let xml = JobConfig::default().to_xml().expect("serialization should succeed");
        assert!(xml.contains(r#"scm class="hudson.scm.NullSCM""#));
    }

    #[test]
    fn default_config_has_empty_build_containers() {
        let xml = JobConfig::default().to_xml().expect("serialization should succeed");

        assert!(xml.contains("<builders/>"));
        assert!(xml.contains("<publishers/>"));
        assert!(xml.contains("<buildWrappers/>"));
        assert!(xml.contains("<triggers/>"));
    }

    #[test]
    fn default_config_flags() {
        let xml = JobConfig::default().to_xml().expect("serialization should succeed");

        assert!(xml.contains("<disabled>false</disabled>"));
        assert!(xml.contains("<canRoam>true</canRoam>"));
        assert!(xml.contains("<concurrentBuild>false</concurrentBuild>"));
    }

    #[test]
    fn description_is_embedded() {
        let xml = JobConfig::with_description("nightly build")
            .to_xml()
            .expect("serialization should succeed");
        assert!(xml.contains("<description>nightly build</description>"));
    }
}

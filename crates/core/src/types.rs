//! Named handles for Jenkins entities.
//!
//! [`Job`] and [`ListView`] carry only a name. They are constructed
//! fresh per query -- existence on the server is never cached
//! client-side, so holding a handle says nothing about current server
//! state.

use std::fmt;

/// Kind of named entity an operation acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A build/pipeline definition.
    Job,
    /// A grouping/dashboard of jobs.
    View,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Job => write!(f, "Job"),
            Self::View => write!(f, "View"),
        }
    }
}

/// Named handle for a build definition on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    name: String,
}

impl Job {
    /// Create a handle for the job named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The job's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Named handle for a list view on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    name: String,
}

impl ListView {
    /// Create a handle for the view named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The view's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_kind_display() {
        assert_eq!(ItemKind::Job.to_string(), "Job");
        assert_eq!(ItemKind::View.to_string(), "View");
    }

    #[test]
    fn handles_expose_their_name() {
        assert_eq!(Job::new("deploy").name(), "deploy");
        assert_eq!(ListView::new("qa").name(), "qa");
    }
}

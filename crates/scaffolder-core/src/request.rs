//! Caller-supplied input to a scaffold session

use serde::Serialize;
use std::fmt;

/// Database settings forwarded to the generator untouched
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatabaseOptions {
    #[serde(rename = "dbclient", skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(rename = "dbhost", skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(rename = "dbsrv", skip_serializing_if = "Option::is_none")]
    pub srv: Option<String>,
    #[serde(rename = "dbport", skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(rename = "dbname", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "dbusername", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "dbpassword", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "dbssl", skip_serializing_if = "Option::is_none")]
    pub ssl: Option<String>,
    #[serde(rename = "dbauth", skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(rename = "dbfile", skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(rename = "dbforce")]
    pub force: bool,
}

// Hand-written so the password never ends up in logs.
impl fmt::Debug for DatabaseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseOptions")
            .field("client", &self.client)
            .field("host", &self.host)
            .field("srv", &self.srv)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("ssl", &self.ssl)
            .field("auth", &self.auth)
            .field("file", &self.file)
            .field("force", &self.force)
            .finish()
    }
}

/// Flags the prompt engine never interprets, only forwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorFlags {
    /// Start the application once it is created
    pub run: bool,
    /// Force npm instead of yarn
    pub use_npm: bool,
    /// Display database connection errors
    pub debug: bool,
    #[serde(flatten)]
    pub database: DatabaseOptions,
}

impl Default for GeneratorFlags {
    fn default() -> Self {
        Self {
            run: true,
            use_npm: false,
            debug: false,
            database: DatabaseOptions::default(),
        }
    }
}

/// Partial input collected from the command line. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldRequest {
    project_name: Option<String>,
    template_reference: Option<String>,
    use_quickstart: Option<bool>,
    flags: GeneratorFlags,
}

impl ScaffoldRequest {
    pub fn new(
        project_name: Option<String>,
        template_reference: Option<String>,
        use_quickstart: Option<bool>,
        flags: GeneratorFlags,
    ) -> Self {
        Self {
            project_name: project_name.filter(|s| !s.is_empty()),
            template_reference: template_reference.filter(|s| !s.is_empty()),
            use_quickstart,
            flags,
        }
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    /// Repository URL of a template or starter
    pub fn template_reference(&self) -> Option<&str> {
        self.template_reference.as_deref()
    }

    /// `Some(false)` is a supplied value, not an absent one
    pub fn use_quickstart(&self) -> Option<bool> {
        self.use_quickstart
    }

    pub fn flags(&self) -> &GeneratorFlags {
        &self.flags
    }
}

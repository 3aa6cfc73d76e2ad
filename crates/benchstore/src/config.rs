//! Command line and environment configuration.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BENCHSTORE_HOSTS` | http://localhost:9200 | Comma-separated Elasticsearch URLs |
//! | `BENCHSTORE_INDEX` | benchmarks | Index holding benchmark documents |
//! | `BENCHSTORE_DOC_TYPE` | benchmark | Document type recorded in the mapping |
//! | `BENCHSTORE_MACHINE_ID` | | Machine id prepended to saved document ids |
//! | `BENCHSTORE_REQUEST_TIMEOUT_MS` | 30000 | Request timeout (milliseconds) |
//! | `BENCHSTORE_USERNAME` | | Basic auth username |
//! | `BENCHSTORE_PASSWORD` | | Basic auth password |
//! | `BENCHSTORE_API_TOKEN` | | Bearer token |
//! | `BENCHSTORE_INSECURE` | false | Skip TLS certificate validation |
//! | `BENCHSTORE_LOG_LEVEL` | info | Log level |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Store and browse benchmark runs kept in Elasticsearch.
#[derive(Debug, Clone, Parser)]
#[command(name = "benchstore", version)]
pub struct Cli {
    /// Storage connection settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true, env = "BENCHSTORE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create the benchmark index if it does not exist.
    Init,

    /// Save a run file written by the benchmark harness.
    Save {
        /// Path to the run JSON file.
        file: PathBuf,

        /// Save name used as document id prefix (defaults to the file stem).
        #[arg(long)]
        name: Option<String>,
    },

    /// List run keys of a project, oldest first.
    List {
        /// Project name.
        #[arg(long, short)]
        project: String,
    },

    /// Print the runs of a project as JSON, oldest first.
    Show {
        /// Project name.
        #[arg(long, short)]
        project: String,

        /// Only consider documents whose id starts with this prefix.
        #[arg(long)]
        id_prefix: Option<String>,
    },

    /// Print every benchmark of a project as JSON, newest first.
    Benchmarks {
        /// Project name.
        #[arg(long, short)]
        project: String,
    },

    /// Check cluster health.
    Health,
}

/// Connection settings for the benchmark store.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// Elasticsearch URLs, comma separated.
    #[arg(
        long,
        global = true,
        env = "BENCHSTORE_HOSTS",
        default_value = "http://localhost:9200"
    )]
    pub hosts: String,

    /// Index holding benchmark documents.
    #[arg(long, global = true, env = "BENCHSTORE_INDEX", default_value = "benchmarks")]
    pub index: String,

    /// Document type name recorded in the index mapping.
    #[arg(long, global = true, env = "BENCHSTORE_DOC_TYPE", default_value = "benchmark")]
    pub doc_type: String,

    /// Machine id prepended to the ids of saved documents.
    #[arg(long, global = true, env = "BENCHSTORE_MACHINE_ID")]
    pub machine_id: Option<String>,

    /// Request timeout in milliseconds.
    #[arg(
        long,
        global = true,
        env = "BENCHSTORE_REQUEST_TIMEOUT_MS",
        default_value = "30000"
    )]
    pub request_timeout_ms: u64,

    /// Username for basic authentication.
    #[arg(long, global = true, env = "BENCHSTORE_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication.
    #[arg(long, global = true, env = "BENCHSTORE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Bearer token (takes precedence over basic authentication).
    #[arg(long, global = true, env = "BENCHSTORE_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Skip TLS certificate validation. Only use for development/testing.
    #[arg(long, global = true, env = "BENCHSTORE_INSECURE", default_value = "false")]
    pub insecure: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            hosts: "http://localhost:9200".to_string(),
            index: "benchmarks".to_string(),
            doc_type: "benchmark".to_string(),
            machine_id: None,
            request_timeout_ms: 30000,
            username: None,
            password: None,
            api_token: None,
            insecure: false,
        }
    }
}

impl StoreConfig {
    /// Returns the configured hosts, trimmed, without empty entries.
    pub fn host_list(&self) -> Vec<String> {
        self.hosts
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.host_list().is_empty() {
            errors.push("At least one host is required".to_string());
        }

        if self.index.trim().is_empty() {
            errors.push("Index name cannot be empty".to_string());
        } else if self.index.chars().any(|c| c.is_ascii_uppercase()) {
            errors.push("Index name must be lowercase".to_string());
        }

        if self.request_timeout_ms == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.username.is_some() != self.password.is_some() {
            errors.push("Username and password must be given together".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Builds the Elasticsearch storage configuration.
    #[cfg(feature = "elasticsearch")]
    pub fn elasticsearch_config(
        &self,
    ) -> benchstore_persistence::backends::elasticsearch::ElasticsearchConfig {
        use benchstore_persistence::backends::elasticsearch::{
            ElasticsearchAuth, ElasticsearchConfig,
        };

        let auth = match (&self.api_token, &self.username, &self.password) {
            (Some(token), _, _) => Some(ElasticsearchAuth::Bearer {
                token: token.clone(),
            }),
            (None, Some(username), Some(password)) => Some(ElasticsearchAuth::Basic {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        };

        ElasticsearchConfig {
            hosts: self.host_list(),
            index: self.index.clone(),
            doc_type: self.doc_type.clone(),
            default_machine_id: self.machine_id.clone(),
            request_timeout_ms: self.request_timeout_ms,
            auth,
            disable_certificate_validation: self.insecure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.host_list(), vec!["http://localhost:9200"]);
        assert_eq!(config.index, "benchmarks");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_host_list() {
        let config = StoreConfig {
            hosts: " http://es1:9200, ,http://es2:9200 ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.host_list(), vec!["http://es1:9200", "http://es2:9200"]);
    }

    #[test]
    fn test_validate_errors() {
        let config = StoreConfig {
            hosts: ",".to_string(),
            index: "Benchmarks".to_string(),
            request_timeout_ms: 0,
            username: Some("elastic".to_string()),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.contains("host")));
        assert!(errors.iter().any(|e| e.contains("lowercase")));
        assert!(errors.iter().any(|e| e.contains("password")));
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from([
            "benchstore",
            "--index",
            "perf",
            "show",
            "--project",
            "demo",
            "--id-prefix",
            "ci-01_0001",
        ])
        .unwrap();
        assert_eq!(cli.store.index, "perf");
        assert!(matches!(
            cli.command,
            Command::Show { ref project, id_prefix: Some(ref prefix) }
                if project == "demo" && prefix == "ci-01_0001"
        ));

        let cli =
            Cli::try_parse_from(["benchstore", "save", "run.json", "--name", "0001"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Save { ref file, name: Some(ref name) }
                if file == &PathBuf::from("run.json") && name == "0001"
        ));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::try_parse_from([
            "benchstore",
            "list",
            "-p",
            "demo",
            "--machine-id",
            "ci-01",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.store.machine_id.as_deref(), Some("ci-01"));
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_missing_project_is_rejected() {
        assert!(Cli::try_parse_from(["benchstore", "list"]).is_err());
    }

    #[cfg(feature = "elasticsearch")]
    #[test]
    fn test_elasticsearch_config() {
        use benchstore_persistence::backends::elasticsearch::ElasticsearchAuth;

        let config = StoreConfig {
            hosts: "http://es1:9200,http://es2:9200".to_string(),
            machine_id: Some("ci-01".to_string()),
            username: Some("elastic".to_string()),
            password: Some("changeme".to_string()),
            ..Default::default()
        };
        let es = config.elasticsearch_config();
        assert_eq!(es.hosts.len(), 2);
        assert_eq!(es.default_machine_id.as_deref(), Some("ci-01"));
        assert!(matches!(es.auth, Some(ElasticsearchAuth::Basic { .. })));

        let config = StoreConfig {
            api_token: Some("token".to_string()),
            ..config
        };
        assert!(matches!(
            config.elasticsearch_config().auth,
            Some(ElasticsearchAuth::Bearer { .. })
        ));
    }
}

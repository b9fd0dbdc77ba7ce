use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "./Academy_Candidates.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "Sorted_Academy_Candidates.csv";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for a report run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub input: InputConfig,
    pub report: ReportConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let input = InputConfig {
            path: PathBuf::from(
                env::var("ACADEMY_INPUT").unwrap_or_else(|_| DEFAULT_INPUT_PATH.to_string()),
            ),
        };

        let stats_roles = match env::var("ACADEMY_STATS_ROLES") {
            Ok(raw) if !raw.trim().is_empty() => {
                Some(parse_role_list(&raw, "ACADEMY_STATS_ROLES")?)
            }
            _ => None,
        };

        let write_failures = match env::var("ACADEMY_WRITE_FAILURES") {
            Ok(raw) => WriteFailurePolicy::parse(&raw)?,
            Err(_) => WriteFailurePolicy::Fail,
        };

        let report = ReportConfig {
            output_path: PathBuf::from(
                env::var("ACADEMY_OUTPUT").unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string()),
            ),
            stats_roles,
            focus: FocusRoles {
                average_age: role_var("ACADEMY_AVERAGE_AGE_ROLE", "QA")?,
                oldest: role_var("ACADEMY_OLDEST_ROLE", "Mobile")?,
                youngest: role_var("ACADEMY_YOUNGEST_ROLE", "Web")?,
                total_age: role_var("ACADEMY_TOTAL_AGE_ROLE", "QA")?,
                qa_instructor: role_var("ACADEMY_QA_INSTRUCTOR_ROLE", "QA")?,
                mobile_instructor: role_var("ACADEMY_MOBILE_INSTRUCTOR_ROLE", "Mobile")?,
            },
            write_failures,
        };

        let log_level = env::var("ACADEMY_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            input,
            report,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where candidate records are read from.
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub path: PathBuf,
}

/// Output location and the roles the console summary reports on.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_path: PathBuf,
    /// Roles considered by the statistics; `None` means every role, in first-seen order.
    pub stats_roles: Option<Vec<String>>,
    pub focus: FocusRoles,
    pub write_failures: WriteFailurePolicy,
}

/// Role names behind each fixed summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRoles {
    pub average_age: String,
    pub oldest: String,
    pub youngest: String,
    pub total_age: String,
    pub qa_instructor: String,
    pub mobile_instructor: String,
}

impl Default for FocusRoles {
    fn default() -> Self {
        Self {
            average_age: "QA".to_string(),
            oldest: "Mobile".to_string(),
            youngest: "Web".to_string(),
            total_age: "QA".to_string(),
            qa_instructor: "QA".to_string(),
            mobile_instructor: "Mobile".to_string(),
        }
    }
}

/// What a failed report write does to the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteFailurePolicy {
    /// Surface the failure and exit non-zero.
    Fail,
    /// Log the failure and keep a zero exit status.
    Warn,
}

impl WriteFailurePolicy {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fail" | "error" => Ok(Self::Fail),
            "warn" | "log" => Ok(Self::Warn),
            _ => Err(ConfigError::InvalidWritePolicy(value.to_string())),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Splits a comma separated role list, trimming each entry.
///
/// `source` names the variable or flag the list came from.
pub fn parse_role_list(raw: &str, source: &'static str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(|role| {
            let role = role.trim();
            if role.is_empty() {
                Err(ConfigError::EmptyRole { variable: source })
            } else {
                Ok(role.to_string())
            }
        })
        .collect()
}

fn role_var(variable: &'static str, default: &str) -> Result<String, ConfigError> {
    match env::var(variable) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyRole { variable }),
        Ok(value) => Ok(value.trim().to_string()),
        Err(_) => Ok(default.to_string()),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyRole { variable: &'static str },
    InvalidWritePolicy(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyRole { variable } => {
                write!(f, "{variable} must not contain empty role names")
            }
            ConfigError::InvalidWritePolicy(value) => write!(
                f,
                "ACADEMY_WRITE_FAILURES must be 'fail' or 'warn' (found '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

use crate::config::TimelineSettings;
use crate::domain::model::{MemberOrder, OutputFormat};
use crate::utils::error::{Result, TimelineError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 3] = ["text", "json", "csv"];
pub const MEMBER_ORDERS: [&str; 2] = ["input", "start-desc"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub timeline: TimelineSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineSection {
    /// Reference date for ongoing records, `YYYY-MM-DD`.
    pub now: Option<String>,
    pub member_order: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TimelineError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TimelineError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TimelineError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        let Some(format) = self.output.format.as_deref() else {
            return Ok(None);
        };
        validation::validate_one_of("output.format", format, &OUTPUT_FORMATS)?;
        Ok(Some(match format {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Text,
        }))
    }

    pub fn member_order(&self) -> Result<Option<MemberOrder>> {
        let Some(order) = self.timeline.member_order.as_deref() else {
            return Ok(None);
        };
        validation::validate_one_of("timeline.member_order", order, &MEMBER_ORDERS)?;
        Ok(Some(match order {
            "start-desc" => MemberOrder::StartDescending,
            _ => MemberOrder::Input,
        }))
    }

    pub fn now(&self) -> Result<Option<chrono::NaiveDate>> {
        self.timeline
            .now
            .as_deref()
            .map(|now| validation::parse_config_date("timeline.now", now))
            .transpose()
    }

    /// Settings from this file alone; the input path may still be missing.
    pub fn to_settings(&self) -> Result<TimelineSettings> {
        Ok(TimelineSettings {
            input_path: self.input.path.clone().unwrap_or_default(),
            output_path: self.output.path.clone(),
            output_format: self.output_format()?.unwrap_or_default(),
            member_order: self.member_order()?.unwrap_or_default(),
            now: self.now()?,
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_required_field("input.path", &self.input.path)
            .and_then(|path| validation::validate_path("input.path", path))?;
        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }
        self.to_settings().map(|_| ())
    }
}

pub mod cli;
pub mod toml_config;

use crate::domain::model::{MemberOrder, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TimelineError};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;

#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;

/// Fully resolved run settings, whichever source they came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimelineSettings {
    pub input_path: String,
    pub output_path: Option<String>,
    pub output_format: OutputFormat,
    pub member_order: MemberOrder,
    pub now: Option<NaiveDate>,
}

impl ConfigProvider for TimelineSettings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn member_order(&self) -> MemberOrder {
        self.member_order
    }

    fn now_override(&self) -> Option<NaiveDate> {
        self.now
    }
}

impl Validate for TimelineSettings {
    fn validate(&self) -> Result<()> {
        if self.input_path.is_empty() {
            return Err(TimelineError::MissingConfigError {
                field: "input.path".to_string(),
            });
        }
        validation::validate_path("input.path", &self.input_path)?;
        if let Some(path) = &self.output_path {
            validation::validate_path("output.path", path)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
fn parse_now(value: &str) -> std::result::Result<NaiveDate, String> {
    validation::parse_config_date("now", value).map_err(|e| e.to_string())
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "experience-timeline")]
#[command(about = "Group experience records by affiliation and total their tenure")]
pub struct CliConfig {
    /// JSON file with experience records
    #[arg(short, long)]
    pub input: Option<String>,

    /// TOML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Reference date for ongoing records (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_now)]
    pub now: Option<NaiveDate>,

    #[arg(long, value_enum)]
    pub member_order: Option<MemberOrder>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Layers the flags over `base`.
    pub fn apply_to(&self, mut base: TimelineSettings) -> TimelineSettings {
        if let Some(input) = &self.input {
            base.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            base.output_path = Some(output.clone());
        }
        if let Some(format) = self.format {
            base.output_format = format;
        }
        if let Some(order) = self.member_order {
            base.member_order = order;
        }
        if self.now.is_some() {
            base.now = self.now;
        }
        base
    }

    /// Loads the TOML file when given, then applies the flags.
    pub fn resolve(&self) -> Result<TimelineSettings> {
        let base = match &self.config {
            Some(path) => toml_config::TomlConfig::from_file(path)?.to_settings()?,
            None => TimelineSettings::default(),
        };
        let settings = self.apply_to(base);
        settings.validate()?;
        Ok(settings)
    }
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Filter used when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "experience_timeline=debug,info"
    } else {
        "experience_timeline=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Installs the global subscriber. Output goes to stderr so rendered
/// timelines on stdout stay clean.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let registry = tracing_subscriber::registry().with(env_filter(verbose));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_crate_debug() {
        assert_eq!(default_directive(true), "experience_timeline=debug,info");
        assert_eq!(default_directive(false), "experience_timeline=info");
    }

    #[test]
    fn test_default_directives_parse() {
        for verbose in [true, false] {
            assert!(default_directive(verbose)
                .parse::<EnvFilter>()
                .is_ok());
        }
    }

    #[test]
    fn test_compact_is_default_format() {
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}

use clap::Parser;
use experience_timeline::core::engine::{self, TimelineEngine};
use experience_timeline::core::render;
use experience_timeline::domain::ports::ConfigProvider;
use experience_timeline::utils::error::ErrorSeverity;
use experience_timeline::utils::logger;
use experience_timeline::{CliConfig, JsonFileSource, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.log_format.unwrap_or_default(), cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // Read the clock once; every ongoing record resolves against this date.
    let now = engine::resolve_now(&settings);
    let storage = LocalStorage::new(".".to_string());
    let source = JsonFileSource::new(storage.clone(), settings.input_path());
    let timeline_engine = TimelineEngine::new(source).with_member_order(settings.member_order());

    let result = match timeline_engine.run(now).await {
        Ok(timeline) => match settings.output_path() {
            Some(path) => {
                engine::export(&storage, path, &timeline, settings.output_format())
                    .await
                    .map(|path| tracing::info!("Output saved to: {}", path))
            }
            None => render::render(&timeline, settings.output_format())
                .map(|rendered| println!("{}", rendered)),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(
            "Timeline assembly failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

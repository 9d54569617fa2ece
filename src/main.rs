use animal_cards::config::load_dotenv;
use animal_cards::domain::ports::AnimalSource;
use animal_cards::utils::{logger, validation::Validate};
use animal_cards::{
    AnimalError, ApiNinjasSource, CliConfig, HtmlPipeline, JsonFileSource, LocalStorage,
    PageEngine, Settings, SourceKind,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Must run before parsing so clap sees API_KEY from .env.
    let dotenv = load_dotenv();
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if let Ok(Some(path)) = &dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let result = match dotenv.and_then(|_| cli.resolve()) {
        Ok(settings) => run(settings).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(output_path) => {
            tracing::info!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

async fn run(settings: Settings) -> Result<String, AnimalError> {
    tracing::debug!("Settings: {:?}", settings);
    settings.validate()?;

    match settings.source {
        SourceKind::Remote => {
            let source = ApiNinjasSource::new(&settings.api_endpoint, settings.api_key()?);
            render_page(&settings, source).await
        }
        SourceKind::File => {
            let source = JsonFileSource::new(LocalStorage::default(), &settings.data_file);
            render_page(&settings, source).await
        }
    }
}

async fn render_page<A: AnimalSource>(settings: &Settings, source: A) -> Result<String, AnimalError> {
    let pipeline = HtmlPipeline::new(
        LocalStorage::default(),
        source,
        settings.search_input(),
        &settings.template_path,
        &settings.output_path,
    );

    PageEngine::new(pipeline).run().await
}

use anyhow::{bail, Context, Result};
use docsite_i18n::config::{Config, LoaderKind};
use docsite_i18n::i18n::{
    builtin_dictionaries, loader, DictionarySet, TranslationSources, TranslationSystem,
};
use tracing::{error, info, warn};

const USAGE: &str = "Usage:
  docsite-i18n                           List built languages
  docsite-i18n <lang> <key> [name=value]  Translate one key
  docsite-i18n --check                   Validate translations";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("docsite_i18n=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if matches!(args.first().map(String::as_str), Some("-h" | "--help")) {
        println!("{USAGE}");
        return Ok(());
    }

    // Load configuration from environment
    let config = Config::from_env()?;
    let system = build_system(&config).await?;

    match args.first().map(String::as_str) {
        None => print_languages(&system),
        Some("--check") => check(&system)?,
        Some(lang) => {
            let Some(key) = args.get(1) else {
                bail!("Missing key\n\n{USAGE}");
            };
            let pairs = parse_args(&args[2..])?;
            let t = system.translator_for(Some(lang));
            if pairs.is_empty() {
                println!("{}", t.t(key));
            } else {
                println!("{}", t.t_with(key, pairs));
            }
        }
    }

    Ok(())
}

async fn build_system(config: &Config) -> Result<TranslationSystem> {
    let site = config.load_site_config()?;

    let plugin = match &config.plugin_translations_file {
        Some(path) => loader::load_plugin_translations(path)
            .await
            .with_context(|| format!("Failed to load plugin translations {}", path.display()))?,
        None => DictionarySet::new(),
    };

    info!(
        "Loading user translations from {} ({:?} loader)",
        config.content_dir.display(),
        config.loader
    );

    let system = match config.loader {
        LoaderKind::Fs => {
            TranslationSystem::from_fs(site.as_ref(), &config.content_dir, plugin).await?
        }
        LoaderKind::Collection => {
            let user = loader::load_collection(&config.content_dir)
                .await?
                .unwrap_or_default();
            let sources = TranslationSources::new(builtin_dictionaries()?)
                .with_plugin(plugin)
                .with_user(user);
            TranslationSystem::build(site.as_ref(), &sources)?
        }
    };

    Ok(system)
}

fn print_languages(system: &TranslationSystem) {
    let translations = system.translations();
    for lang in translations.languages() {
        let keys = translations.get(lang.as_str()).map_or(0, |d| d.len());
        let t = system.translator_for(Some(lang.as_str()));
        let marker = if lang == system.default_lang() { " (default)" } else { "" };
        println!("{}\t{}\t{} keys{}", lang, t.dir(), keys, marker);
    }
}

fn check(system: &TranslationSystem) -> Result<()> {
    let findings = system.validate();
    if findings.is_empty() {
        info!("All translations are consistent with '{}'", system.default_lang());
        return Ok(());
    }

    let mut error_count = 0;
    for (lang, report) in &findings {
        for message in &report.warnings {
            warn!("[{}] {}", lang, message);
        }
        for message in &report.errors {
            error!("[{}] {}", lang, message);
        }
        error_count += report.errors.len();
    }

    if error_count > 0 {
        bail!("{} translation errors found", error_count);
    }
    Ok(())
}

/// Parse `name=value` interpolation arguments.
fn parse_args(args: &[String]) -> Result<Vec<(&str, &str)>> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .with_context(|| format!("Expected name=value, got '{}'", arg))
        })
        .collect()
}

// Main entry point
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use trq::application::settings::RefreshOutcome;
use trq::domain::model::{ActionCommand, ResultItem};
use trq::infrastructure::config::{self, load_config};
use trq::interfaces::cli::Cli;
use trq::interfaces::plugin::{QueryContext, TranslatorPlugin};
use trq::presentation::render::format_items;
use trq::state::PluginState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    // Flags that need no provider
    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            // Run editor in blocking task
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor).arg(&config_path).status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }

    let mut state = PluginState::new(config)?.with_debounce(std::time::Duration::ZERO);
    if let Some(path) = config::get_config_path() {
        state = state.with_persist_path(path);
    }
    let plugin = TranslatorPlugin::new(state);

    // Handle commands (flags)
    if cli.engines {
        for engine in plugin.state().provider.engines() {
            println!("{}", engine);
        }
        return Ok(());
    }
    if cli.set_translator.is_some() || cli.set_lang.is_some() {
        match plugin
            .update_settings(cli.set_translator.clone(), cli.set_lang.clone())
            .await?
        {
            RefreshOutcome::Refreshed { sources, targets } => {
                println!(
                    "{} ({} source, {} target languages)",
                    "Settings updated".green(),
                    sources,
                    targets
                );
            }
            RefreshOutcome::Stale { reason } => {
                println!("{}", "Settings updated".green());
                eprintln!(
                    "{}",
                    format!("Language list unavailable: {}", reason).yellow()
                );
            }
        }
        return Ok(());
    }
    if cli.status {
        print_status(&plugin).await;
        return Ok(());
    }

    // Handle query
    if cli.query.is_empty() {
        eprintln!("{}", "Please provide text to translate".red());
        std::process::exit(1);
    }

    // Without a language list every query still works, it just falls back
    // to the default destination language.
    if let RefreshOutcome::Stale { reason } = plugin.startup().await {
        eprintln!(
            "{}",
            format!("Warning: language list unavailable ({})", reason).yellow()
        );
    }

    let (ctx, token) = QueryContext::new(cli.query.join(" "));
    let token = Arc::new(token);

    // Ctrl-C supersedes the in-flight evaluation instead of killing the
    // process mid-request.
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    let items = plugin.items(&ctx).await;
    if items.is_empty() {
        // Superseded, or nothing to translate.
        return Ok(());
    }

    // Output result
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print!("{}", format_items(&items));
    }

    if cli.copy || cli.paste {
        run_clipboard_action(&plugin, &items[0], cli.paste)?;
    }

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = config::resolve_level(&logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt().with_env_filter(filter).init();

    Ok(())
}

/// Run the copy or copy-and-paste action of the translated item.
fn run_clipboard_action(
    plugin: &TranslatorPlugin,
    item: &ResultItem,
    paste: bool,
) -> anyhow::Result<()> {
    if item.actions.is_empty() {
        // Error card; nothing to copy.
        return Ok(());
    }
    let wanted = if paste { "copy-paste" } else { "copy" };
    let action = item.actions.iter().find(|a| a.id == wanted).or_else(|| {
        eprintln!("{}", "Paste helper not available; copying only".yellow());
        item.actions.last()
    });
    if let Some(action) = action {
        plugin.run_action(action)?;
        match &action.command {
            ActionCommand::CopyAndPaste(_) => eprintln!("{}", "Copied and pasted".green()),
            ActionCommand::CopyToClipboard(_) => eprintln!("{}", "Copied to clipboard".green()),
        }
    }
    Ok(())
}

async fn print_status(plugin: &TranslatorPlugin) {
    println!("{}", "trq Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let state = plugin.state();
    let (settings, deepl_key, libre_url) = {
        let config = state.config.read().await;
        (
            config.settings(),
            config.engines.deepl_api_key.clone(),
            config.engines.libre_url.clone(),
        )
    };

    println!("Translator: {}", settings.translator);
    println!("Destination language: {}", settings.lang);
    println!(
        "Config: {}",
        config::get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );

    let deepl_configured = deepl_key.is_some() || std::env::var("DEEPL_API_KEY").is_ok();
    println!(
        "DeepL API key: {}",
        if deepl_configured {
            "Configured"
        } else {
            "Not configured"
        }
    );
    println!("LibreTranslate URL: {}", libre_url);

    match plugin.startup().await {
        RefreshOutcome::Refreshed { sources, targets } => {
            println!("Languages: {} source, {} target", sources, targets);
        }
        RefreshOutcome::Stale { reason } => {
            println!("Languages: unavailable ({})", reason);
        }
    }

    println!(
        "Paste support: {}",
        if state.clipboard.paste_supported() {
            "Available"
        } else {
            "Unavailable"
        }
    );
}

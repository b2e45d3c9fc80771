use clap::Parser;

#[derive(Parser)]
#[command(name = "trq")]
#[command(about = "A query-bar translator: [[from] to] text.")]
#[command(version)]
pub struct Cli {
    /// Copy the translation to the clipboard
    #[arg(short = 'c', long)]
    pub copy: bool,

    /// Copy the translation and synthesise a paste keystroke
    #[arg(short = 'p', long)]
    pub paste: bool,

    /// Output result items as JSON
    #[arg(long)]
    pub json: bool,

    /// List available translation engines
    #[arg(long)]
    pub engines: bool,

    /// Set the configured translator engine
    #[arg(long, value_name = "ENGINE")]
    pub set_translator: Option<String>,

    /// Set the configured destination language
    #[arg(long, value_name = "LANG")]
    pub set_lang: Option<String>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Query text: [[from] to] text
    #[arg(num_args = 1..)]
    pub query: Vec<String>,
}

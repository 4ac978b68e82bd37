use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build a static HTML site from a directory of Markdown files")]
struct Cli {
    /// Config file (compiled defaults are used if it does not exist)
    #[arg(short, long, default_value = "mdsite.toml")]
    config: PathBuf,

    /// Directory of Markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory copied verbatim into the output
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Output directory (replaced on every build)
    #[arg(long)]
    public: Option<PathBuf>,

    /// HTML page template
    #[arg(long)]
    template: Option<PathBuf>,

    /// Log every block and copied file
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = mdsite::Config::load(&cli.config)?;
    if let Some(content) = cli.content {
        config.paths.content = content;
    }
    if let Some(static_dir) = cli.static_dir {
        config.paths.static_dir = static_dir;
    }
    if let Some(public) = cli.public {
        config.paths.public = public;
    }
    if let Some(template) = cli.template {
        config.paths.template = template;
    }

    let report = mdsite::build_site(&config).with_context(|| {
        format!(
            "Error building site into {}",
            config.paths.public.display()
        )
    })?;

    println!(
        "Generated {} pages and copied {} static files into {}",
        report.generated,
        report.copied,
        config.paths.public.display()
    );
    Ok(())
}

//! mdpeek CLI - Markdown preview tool.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use mdpeek_preview::{preview, write_html, WaitMode};
use mdpeek_render::render_page;

#[derive(Parser)]
#[command(name = "mdpeek")]
#[command(about = "Render a Markdown file to sanitized HTML and open it in the default viewer")]
#[command(version)]
struct Cli {
    /// Markdown file to preview
    #[arg(short, long)]
    file: PathBuf,

    /// Alternate page template
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Skip auto-preview
    #[arg(short, long)]
    skip_preview: bool,

    /// Wait for the viewer launcher to exit instead of detaching
    #[arg(long)]
    wait: bool,

    /// Delete the generated file once the viewer launcher has exited
    #[arg(long, conflicts_with = "skip_preview")]
    clean: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    run(cli)
}

/// Drive the pipeline: read, render, write, preview.
fn run(cli: Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let page = render_page(&source, cli.template.as_deref())?;
    let out_path = write_html(page.as_bytes())?;

    println!("{}", out_path.display());

    if cli.skip_preview {
        return Ok(());
    }

    // --clean must not race the launcher, so it forces a wait.
    let mode = if cli.wait || cli.clean {
        WaitMode::WaitForLauncher
    } else {
        WaitMode::Detach
    };

    preview(&out_path, mode)?;

    if cli.clean {
        fs::remove_file(&out_path)
            .with_context(|| format!("failed to remove {}", out_path.display()))?;
        tracing::debug!("removed {}", out_path.display());
    }

    Ok(())
}

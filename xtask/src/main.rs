//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest.
    Test,
    /// Run the criterion benchmarks.
    Bench,
    /// Render a PNG plot of every registered curve into `target/gallery/`.
    Gallery {
        /// Image size in pixels.
        #[arg(long, default_value_t = 256)]
        size: u32,
    },
}

/// Common repository paths computed relative to the `xtask` crate.
#[derive(Debug, Clone)]
struct RepoPaths {
    /// Repository root directory.
    root: PathBuf,
    /// Output directory for `gallery`.
    gallery: PathBuf,
}

impl RepoPaths {
    /// Discover repository paths from `CARGO_MANIFEST_DIR`.
    fn discover() -> Result<Self> {
        let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let root = xtask_dir
            .parent()
            .context("xtask crate must live at <repo>/xtask")?
            .to_path_buf();

        Ok(Self {
            gallery: root.join("target").join("gallery"),
            root,
        })
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = RepoPaths::discover()?;

    match cli.command {
        CommandName::Tidy => tidy(&paths),
        CommandName::Test => test(&paths),
        CommandName::Bench => bench(&paths),
        CommandName::Gallery { size } => gallery(&paths, size),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(paths: &RepoPaths) -> Result<()> {
    format_workspace(paths)?;
    lint_workspace(paths)?;
    format_workspace(paths)?;
    Ok(())
}

/// Run tests using cargo nextest.
fn test(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo nextest run --all").run()?;
    Ok(())
}

/// Run the library benchmarks.
fn bench(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo bench -p easecurve").run()?;
    Ok(())
}

/// Plot every curve in the default catalog with the `ease` CLI.
fn gallery(paths: &RepoPaths, size: u32) -> Result<()> {
    let sh = repo_shell(paths)?;
    prepare_dir(&paths.gallery)?;

    cmd!(sh, "cargo build --release -p ease").run()?;
    let ease = paths.root.join("target").join("release").join("ease");
    let size = size.to_string();

    for curve in easecurve::enumerate_curves() {
        let id = curve.id();
        let output = paths.gallery.join(format!("{id}.png"));
        cmd!(sh, "{ease} plot --size {size} {id} {output}")
            .quiet()
            .run()
            .with_context(|| format!("plotting {id}"))?;
    }

    println!(
        "Wrote {} plots to {}",
        easecurve::enumerate_curves().len(),
        paths.gallery.display()
    );
    Ok(())
}

/// Create or clean an output directory.
fn prepare_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).with_context(|| format!("removing {}", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(())
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;

    let config = paths.root.join("rustfmt-nightly.toml");
    if config.is_file() {
        cmd!(sh, "cargo +nightly fmt --all -- --config-path {config}").run()?;
        return Ok(());
    }

    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Run clippy across the workspace, applying safe fixes.
fn lint_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    Ok(())
}

/// Create a verbose shell rooted at the repository root.
fn repo_shell(paths: &RepoPaths) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(&paths.root);
    Ok(sh)
}

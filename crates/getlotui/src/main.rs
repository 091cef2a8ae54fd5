//! getlotui CLI - add getlotui components to Expo, Flutter and web projects

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use getlotui_core::commands::{self, AddOutcome, InitOutcome};
use getlotui_core::install::{InstallOutcome, PackageInstaller, SkipInstaller, SystemInstaller};
use getlotui_core::templates::{TemplateFetcher, TemplateSource};
use getlotui_core::PackageManager;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Env var holding a tracing filter, e.g. `getlotui_core=debug`
const LOG_ENV: &str = "GETLOTUI_LOG";

#[derive(Parser, Debug)]
#[command(name = "getlotui")]
#[command(about = "Add getlotui components to Expo, Flutter and web projects")]
#[command(version)]
pub struct Args {
    /// Project directory (defaults to the current directory)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Detect the project type and write getlotui.config.json, theme and utility files
    Init(InitArgs),
    /// Copy a component template into the project
    Add(AddArgs),
    /// List known components and which adapters have templates for them
    List(ListArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Print the install command instead of running the package manager
    #[arg(long = "skip-install")]
    pub skip_install: bool,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Component to add, e.g. `button`
    pub component: String,

    /// Local directory to use for templates instead of the bundled ones
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Print the install command instead of running the package manager
    #[arg(long = "skip-install")]
    pub skip_install: bool,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Local directory to use for templates instead of the bundled ones
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

/// Installer picked by `--skip-install`
enum Installer {
    System(SystemInstaller),
    Skip(SkipInstaller),
}

impl Installer {
    fn new(skip_install: bool) -> Self {
        if skip_install {
            Installer::Skip(SkipInstaller)
        } else {
            Installer::System(SystemInstaller)
        }
    }
}

impl PackageInstaller for Installer {
    async fn install(
        &self,
        packages: &[String],
        cwd: &Path,
        package_manager: PackageManager,
    ) -> InstallOutcome {
        match self {
            Installer::System(installer) => installer.install(packages, cwd, package_manager).await,
            Installer::Skip(installer) => installer.install(packages, cwd, package_manager).await,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn project_dir(cwd: Option<PathBuf>) -> Result<PathBuf> {
    let current = std::env::current_dir().context("Failed to read current directory")?;
    Ok(match cwd {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => current.join(dir),
        None => current,
    })
}

/// Run a command; returns the closing message
async fn run(args: Args) -> Result<&'static str> {
    let dir = project_dir(args.cwd)?;
    tracing::debug!("Project directory: {}", dir.display());

    match args.command {
        Command::Init(init_args) => {
            let installer = Installer::new(init_args.skip_install);
            match commands::run_init(&dir, &installer).await? {
                InitOutcome::AlreadyInitialized { .. } => Ok("Nothing to do"),
                InitOutcome::Initialized(_) => Ok("Ready. Add components with `getlotui add <component>`"),
            }
        }
        Command::Add(add_args) => {
            let source = TemplateSource::resolve(add_args.template_dir)?;
            let fetcher = TemplateFetcher::new(source);
            let installer = Installer::new(add_args.skip_install);
            match commands::run_add(&dir, &add_args.component, &fetcher, &installer).await? {
                AddOutcome::Added { .. } => Ok("Happy coding!"),
                AddOutcome::NotInitialized | AddOutcome::NotFound { .. } => Ok("No changes made"),
            }
        }
        Command::List(list_args) => {
            let source = TemplateSource::resolve(list_args.template_dir)?;
            commands::run_list(&dir, &TemplateFetcher::new(source)).await?;
            Ok("Add one with `getlotui add <component>`")
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);

    let _ = cliclack::intro("getlotui");

    // Errors are reported, not propagated: the process exits 0
    match run(args).await {
        Ok(message) => {
            let _ = cliclack::outro(message);
        }
        Err(e) => {
            let _ = cliclack::log::error(format!("{:#}", e));
            let _ = cliclack::outro_cancel("Command failed");
        }
    }

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();
}

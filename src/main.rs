use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vcs::areas::repository::Repository;
use vcs::artifacts::core::PagerWriter;
use vcs::commands::porcelain::log::LogOptions;
use vcs::config::{Config, DEFAULT_LOG_FILTER};

#[derive(Parser)]
#[command(
    name = "vcs",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal snapshot version-control engine",
    long_about = "Records named snapshots of a working tree as a linear chain of commits. \
    Branches are named pointers into that chain, and merging only ever fast-forwards.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "Creates the .vcs layout in the current directory or at the specified path. \
        Running it on an existing repository leaves history, branches and staging untouched."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "Records the content hash of each file. Directories are expanded to the \
        files they contain. Nothing is staged if any path does not exist."
    )]
    Add {
        #[arg(index = 1, required = true, help = "Files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "Snapshots the staged files into a commit whose parent is the current HEAD, \
        advances the current branch and clears the staging area."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "Lists commits from HEAD back to the root commit, newest first."
    )]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "checkout",
        about = "Move HEAD to a commit",
        long_about = "Moves HEAD to the commit with the given hash or unambiguous prefix \
        and reports which files differ from the snapshot."
    )]
    Checkout {
        #[arg(index = 1, help = "The commit hash")]
        hash: String,
    },
    #[command(name = "switch", about = "Switch to an existing branch")]
    Switch {
        #[arg(index = 1, help = "The branch to switch to")]
        branch: String,
    },
    #[command(name = "status", about = "Show the working tree status")]
    Status,
    #[command(
        name = "diff",
        about = "Show staged files against HEAD",
        long_about = "Pairs each staged file with the hash HEAD recorded for the same path."
    )]
    Diff,
    #[command(
        name = "branch",
        about = "List branches, or create one at HEAD",
        long_about = "Without a name, lists all branches and marks the current one. \
        With a name, creates a branch pointing at the current HEAD."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "merge",
        about = "Fast-forward the current branch to another branch",
        long_about = "Moves HEAD and the current branch to the tip of the given branch. \
        Commits only reachable from the current branch are reported, not preserved."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge from")]
        branch: String,
    },
    #[command(
        name = "mark-conflicts",
        about = "Wrap files in conflict markers",
        long_about = "Rewrites each file with conflict markers naming HEAD and the given branch."
    )]
    MarkConflicts {
        #[arg(short, long, help = "The branch named in the closing marker")]
        branch: Option<String>,
        #[arg(index = 1, help = "Files to mark")]
        paths: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load_from_env();
    install_tracing(&config);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn install_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn open_repository(path: &str, config: &Config, writer: Box<dyn std::io::Write>) -> Result<Repository> {
    Repository::with_clock(path, writer, config.clock())
        .with_context(|| format!("unable to open repository at {}", path))
}

fn open_current(config: &Config, writer: Box<dyn std::io::Write>) -> Result<Repository> {
    let pwd = std::env::current_dir().context("unable to read the current directory")?;
    open_repository(&pwd.to_string_lossy(), config, writer)
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    let stdout = || Box::new(std::io::stdout()) as Box<dyn std::io::Write>;

    match cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => {
                    std::fs::create_dir_all(&path)
                        .with_context(|| format!("unable to create directory {}", path))?;
                    open_repository(&path, config, stdout())?
                }
                None => open_current(config, stdout())?,
            };

            repository.init()?;
        }
        Commands::Add { paths } => {
            open_current(config, stdout())?.add(&paths)?;
        }
        Commands::Commit { message } => {
            open_current(config, stdout())?.commit(&message)?;
        }
        Commands::Log { oneline } => {
            let opts = LogOptions { oneline };

            if config.no_pager || !std::io::stdout().is_terminal() {
                open_current(config, stdout())?.show_log(&opts)?;
            } else {
                let pager = PagerWriter::new();
                open_current(config, Box::new(pager.clone()))?.show_log(&opts)?;
                pager.page()?;
            }
        }
        Commands::Checkout { hash } => {
            open_current(config, stdout())?.checkout(&hash)?;
        }
        Commands::Switch { branch } => {
            open_current(config, stdout())?.switch_branch(&branch)?;
        }
        Commands::Status => {
            open_current(config, stdout())?.show_status()?;
        }
        Commands::Diff => {
            open_current(config, stdout())?.show_diff()?;
        }
        Commands::Branch { name } => {
            let mut repository = open_current(config, stdout())?;
            match name {
                Some(name) => {
                    repository.create_branch(&name)?;
                }
                None => repository.show_branches()?,
            }
        }
        Commands::Merge { branch } => {
            open_current(config, stdout())?.merge(&branch)?;
        }
        Commands::MarkConflicts { branch, paths } => {
            open_current(config, stdout())?.mark_conflicts(&paths, branch.as_deref())?;
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "fledge")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A CLI tool for cloning Chrome profiles and launching automated browser sessions",
    long_about = "Fledge clones your real Chrome user profile into a disposable working copy, \
                  scrubs the singleton lock files Chrome leaves behind, and starts an automated \
                  browser session against the copy so the live profile is never locked or corrupted."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone the Chrome profile into a working copy
    Clone {
        /// Destination directory (defaults to ~/AutomationProfile)
        #[arg(value_name = "DEST")]
        dest: Option<PathBuf>,
    },

    /// Clone the profile and launch Chrome against the copy
    Launch {
        /// Working-copy directory (defaults to ~/AutomationProfile)
        #[arg(value_name = "DEST")]
        dest: Option<PathBuf>,

        /// Run Chrome without a visible window
        #[arg(long)]
        headless: bool,

        /// Do not load the profile's extensions
        #[arg(long)]
        no_extensions: bool,

        /// Use a throwaway profile under the system temp dir
        #[arg(long)]
        temp: bool,

        /// Page to open once the browser is up
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Path to the Chrome binary
        #[arg(long, value_name = "PATH")]
        chrome_path: Option<PathBuf>,

        /// Seconds to wait for Chrome to come up
        #[arg(long, value_name = "SECS")]
        launch_timeout: Option<u64>,
    },

    /// Delete a cloned working copy
    Clean {
        /// Directory to remove (defaults to ~/AutomationProfile)
        #[arg(value_name = "DEST")]
        dest: Option<PathBuf>,

        /// Skip the confirmation step
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completion scripts
    #[command(after_help = "SUPPORTED SHELLS:\n    \
                            bash, zsh, fish, elvish, powershell\n\n\
                            INSTALLATION:\n    \
                            Bash:\n        \
                            fledge completion bash >> ~/.bashrc\n\n    \
                            Zsh:\n        \
                            fledge completion zsh > ~/.zfunc/_fledge\n        \
                            then add to ~/.zshrc: fpath+=~/.zfunc; autoload -Uz compinit && compinit\n\n    \
                            Fish:\n        \
                            fledge completion fish > ~/.config/fish/completions/fledge.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL", value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Execute the command
    match cli.command {
        Commands::Clone { dest } => commands::clone::execute(dest).await,
        Commands::Launch {
            dest,
            headless,
            no_extensions,
            temp,
            url,
            chrome_path,
            launch_timeout,
        } => {
            commands::launch::execute(
                dest,
                headless,
                no_extensions,
                temp,
                url,
                chrome_path,
                launch_timeout,
            )
            .await
        }
        Commands::Clean { dest, force } => commands::clean::execute(dest, force).await,
        Commands::Completion { shell } => commands::completion::execute::<Cli>(shell),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("fledge=debug,fledge_profile=debug,fledge_browser=debug")
    } else {
        EnvFilter::new("fledge=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

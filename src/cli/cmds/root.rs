use anyhow::Context;

use crate::base;
use crate::cli;

/// Supplier feedback dashboard
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    /// Access token for the feedback sheet
    ///
    /// Without a token the dashboard shows sample data and imports are not
    /// saved to the sheet.
    #[arg(long, global = true, env = "FEEDBACK_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Import(cli::cmds::import::Import),
    Chart(cli::cmds::chart::Chart),
    Trend(cli::cmds::trend::Trend),
    List(cli::cmds::list::List),
    Suppliers(cli::cmds::suppliers::Suppliers),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;

        let token = self.token.as_deref().filter(|t| !t.is_empty());
        let mut db = base::session::Dashboard::new();
        if let Some(token) = token {
            // A failed load is logged and the sample stays on screen.
            if let Ok(n) = db.load_remote(fs, token) {
                tracing::debug!(records = n, "loaded sheet");
            }
        }

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Import(cmd) => cmd.run(db, fs, token),
            Commands::Chart(cmd) => cmd.run(db, &config),
            Commands::Trend(cmd) => cmd.run(db, &config),
            Commands::List(cmd) => cmd.run(db, &config),
            Commands::Suppliers(cmd) => cmd.run(db),
        }
    }
}

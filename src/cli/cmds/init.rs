use anyhow::Context;

use crate::base;
use crate::cli;

/// Set up a feedback repository in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing repository's config to defaults
    #[arg(long)]
    reset_config: bool,

    /// Default bucket for `trend`: day, week, month or quarter
    #[arg(short, long, value_name = "UNIT")]
    granularity: Option<base::Granularity>,
}

/// Config written for a new repository. Colored unicode charts, monthly
/// trend buckets.
fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        granularity: base::Granularity::Month,
    }
}

/// Describes the sheet store without failing when it is unreadable.
fn sheet_status(fs: &base::Fs) -> String {
    if !fs.path::<base::Sheet>().exists() {
        return "No sheet yet. Import a file with an access token to create one.".to_string();
    }
    match fs.read::<base::Sheet>() {
        Ok(sheet) => {
            let rows = sheet.0.len().saturating_sub(1);
            format!("Found a sheet with {} feedback rows.", rows)
        }
        Err(e) => format!("Found a sheet that cannot be read: {}.", e),
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_repo = fs.is_repo();

        let path = fs.path::<base::Config>();
        let mut config = match self.reset_config || !already_repo {
            true => initial_config(),
            false => fs
                .read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?,
        };
        if let Some(granularity) = self.granularity {
            config.granularity = granularity;
        }
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;

        let headline = match (already_repo, self.reset_config) {
            (false, _) => "Initialized feedback repository",
            (true, false) => "Reinitialized feedback repository",
            (true, true) => "Reset feedback repository configuration",
        };
        Ok(cli::Output::Str(format!(
            "{} in '{}'.\nTrend charts default to {} buckets.\n{}",
            headline,
            fs.dir().display(),
            config.granularity,
            sheet_status(fs),
        )))
    }
}

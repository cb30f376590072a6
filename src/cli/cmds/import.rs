use anyhow::Context;

use crate::base;
use crate::base::session::Mirror;
use crate::cli;

/// Import feedback from a comma- or tab-separated export
///
/// The imported feedback replaces whatever the dashboard was showing. With
/// an access token it is also saved to the sheet, replacing its contents.
#[derive(clap::Parser)]
pub struct Import {
    /// Path to the export, relative to the repository
    file: std::path::PathBuf,
}

impl Import {
    pub fn run(
        self,
        mut db: base::session::Dashboard,
        fs: &base::Fs,
        token: Option<&str>,
    ) -> anyhow::Result<cli::Output> {
        let path = fs.dir().join(&self.file);
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;

        let mirror = token.map(|t| (fs as &dyn base::Gateway, t));
        let imported = match db.import_text(&text, mirror) {
            Ok(x) => x,
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "rejected import");
                return Ok(cli::Output::Str(format!("Nothing imported: {}.", e)));
            }
        };
        if imported.count == 0 {
            return Ok(cli::Output::Str(
                "Nothing imported: every data row is blank.".to_string(),
            ));
        }

        let head = format!("Imported {} feedback items", imported.count);
        Ok(cli::Output::Str(match imported.mirror {
            Mirror::Saved => format!("{} and saved them to the sheet.", head),
            Mirror::Skipped => format!("{}. Not saved to the sheet: no access token.", head),
            Mirror::Failed(e) => format!("{}. Warning: failed to save to the sheet: {}", head, e),
        }))
    }
}

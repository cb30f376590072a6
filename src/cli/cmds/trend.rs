use crate::base;
use crate::cli;
use crate::cli::sharedopts;
use crate::cli::util;

/// Chart how much feedback arrived over time
#[derive(clap::Parser)]
pub struct Trend {
    #[command(flatten)]
    units: Units,

    #[command(flatten)]
    filter_opts: sharedopts::FilterOpts,
}

#[derive(clap::Args)]
#[group(required = false, multiple = false)]
struct Units {
    /// Count feedback per day
    #[arg(short)]
    d: bool,

    /// Count feedback per week, weeks starting on Sunday
    #[arg(short)]
    w: bool,

    /// Count feedback per month
    #[arg(short)]
    m: bool,

    /// Count feedback per quarter
    #[arg(short)]
    q: bool,
}

impl Units {
    /// Returns the chosen granularity, if any flag was given.
    fn granularity(&self) -> Option<base::Granularity> {
        if self.d {
            Some(base::Granularity::Day)
        } else if self.w {
            Some(base::Granularity::Week)
        } else if self.m {
            Some(base::Granularity::Month)
        } else if self.q {
            Some(base::Granularity::Quarter)
        } else {
            None
        }
    }
}

impl Trend {
    pub fn run(
        self,
        mut db: base::session::Dashboard,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let granularity = self.units.granularity().unwrap_or(config.granularity);
        for event in self.filter_opts.events() {
            db.dispatch(event);
        }
        let view = db.view(granularity);
        let charset = util::charset_from_config(config);

        let mut outputs = util::banner(&db).into_iter().collect::<Vec<_>>();
        outputs.push(cli::Output::Str(util::breadcrumb(db.state(), &charset)));
        outputs.push(cli::Output::Barchart(base::barchart::Config {
            charset,
            term_width: util::term_width(),
            rows: view
                .timeline
                .into_iter()
                .map(|(bucket, n)| (bucket.to_string(), n))
                .collect(),
        }));
        Ok(cli::Output::Many(outputs))
    }
}

use crate::base;
use crate::base::drilldown::Tab;
use crate::cli;
use crate::cli::sharedopts;
use crate::cli::util;

/// Show headline figures and the chart for the current drill-down
///
/// Without filters this charts feedback per label. Each '--drill' narrows to
/// the named bar and charts one level deeper. Below a micro label there is
/// nothing left to chart, so the matching feedback is listed instead, a page
/// at a time.
#[derive(clap::Parser)]
pub struct Chart {
    #[command(flatten)]
    page_opts: sharedopts::PageOpts,

    #[command(flatten)]
    filter_opts: sharedopts::FilterOpts,
}

impl Chart {
    pub fn run(
        self,
        mut db: base::session::Dashboard,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        for event in self.filter_opts.events() {
            db.dispatch(event);
        }
        db.goto_page(self.page_opts.page);
        let view = db.view(config.granularity);
        let charset = util::charset_from_config(config);

        let mut outputs = util::banner(&db).into_iter().collect::<Vec<_>>();
        outputs.push(cli::Output::Str(util::breadcrumb(db.state(), &charset)));
        outputs.push(cli::Output::Kpis(view.kpis));
        let is_leaf =
            db.state().tab() == Tab::Categories && db.state().level() == base::Level::MicroLabel;
        outputs.push(if is_leaf {
            cli::Output::Listing(base::Listing {
                charset,
                records: view.page,
                pager: view.pager,
            })
        } else {
            cli::Output::Barchart(base::barchart::Config {
                charset,
                term_width: util::term_width(),
                rows: view.bars.into_iter().map(|b| (b.name, b.count)).collect(),
            })
        });
        Ok(cli::Output::Many(outputs))
    }
}

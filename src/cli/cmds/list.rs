use crate::base;
use crate::cli;
use crate::cli::sharedopts;
use crate::cli::util;

/// List feedback a page at a time
#[derive(clap::Parser)]
pub struct List {
    #[command(flatten)]
    page_opts: sharedopts::PageOpts,

    #[command(flatten)]
    filter_opts: sharedopts::FilterOpts,
}

impl List {
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
        outputs.push(cli::Output::Listing(base::Listing {
            charset,
            records: view.page,
            pager: view.pager,
        }));
        Ok(cli::Output::Many(outputs))
    }
}

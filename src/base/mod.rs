mod aggregate;
pub mod barchart;
mod category;
mod charset;
mod config;
pub mod date;
pub mod drilldown;
pub mod filter;
pub mod fs;
pub mod gateway;
pub mod interval;
mod listing;
pub mod normalize;
mod page;
pub mod parser;
mod price;
mod record;
pub mod recordlist;
pub mod sample;
pub mod schema;
pub mod session;
pub mod stats;
pub mod timeline;
pub mod util;

pub use aggregate::Aggregate;
pub use category::Category;
pub use category::Level;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use fs::Fs;
pub use fs::ReadError;
pub use gateway::Gateway;
pub use gateway::GatewayError;
pub use gateway::Sheet;
pub use interval::Interval;
pub use listing::Listing;
pub use page::Pager;
pub use parser::Table;
pub use price::Price;
pub use record::Record;
pub use recordlist::Recordlist;
pub use schema::Columns;
pub use schema::Source;
pub use timeline::Bucket;
pub use timeline::Granularity;

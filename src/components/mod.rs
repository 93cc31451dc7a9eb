//! UI Components
//!
//! Presentational pieces of the greeting page. State lives in `App`.

mod page_shell;
mod connection_card;
mod counter_card;
mod features_card;

pub use page_shell::{PageHeader, PageFooter};
pub use connection_card::ConnectionCard;
pub use counter_card::{Counter, CounterCard};
pub use features_card::FeaturesCard;

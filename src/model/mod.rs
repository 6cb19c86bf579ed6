pub mod categories;
pub mod record;

pub use categories::{Filter, Sex, categories_for};
pub use record::{Dataset, ResultRecord, Selection};

mod criteria;
mod dispatcher;

pub use criteria::Criteria;
pub use dispatcher::{SearchDispatcher, SearchError, SearchOutcome, SearchStrategy};

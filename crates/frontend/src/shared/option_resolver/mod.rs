pub mod cancel;
pub mod debounce;
pub mod resolver;
pub mod source;

pub use cancel::{CancelToken, Cancellation};
pub use debounce::Debouncer;
pub use resolver::{FetchOutcome, OptionResolver, ResolveError, SearchTicket};
pub use source::OptionSource;

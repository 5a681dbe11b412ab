pub mod storage;

pub use storage::current_user_id;

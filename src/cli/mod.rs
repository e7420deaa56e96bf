pub mod args;
pub mod root;

pub use args::{parse_meta_entry, Args};
pub use root::RootCommand;

pub mod environment;
pub mod paths;

pub use environment::{get_catalog_path, get_home_dir};
pub use paths::{HISTORY_FILE_NAME, history_path};

mod change_origin_repo;
mod history_repo;

pub use change_origin_repo::*;
pub use history_repo::*;

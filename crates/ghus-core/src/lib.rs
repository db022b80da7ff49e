pub mod config;
pub mod logging;

pub mod paginate;
pub mod retry;
pub mod search;
pub mod searcher;
pub mod session;

mod common;
pub use self::common::*;
pub mod config;
pub use self::config::*;
mod error;
pub use self::error::{Error, Result};
pub mod graph;
pub use self::graph::LinkGraph;
pub mod loader;
pub use self::loader::{crawl, load_corpus};
pub mod report;

pub mod page_rank;
pub use self::page_rank::{iterate, sample, transition};

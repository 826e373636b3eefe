pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod graph;
pub mod reporting;
pub mod types;

pub use error::{RankError, Result};
pub use graph::rank::{
    iterate, sample, transition, IterativeSolver, LinkGraph, PageId, RankMap, Sampler,
};

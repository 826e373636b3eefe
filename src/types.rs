// src/types.rs
use serde::Serialize;

use crate::graph::rank::RankMap;

/// Which estimator produced a set of ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Sampling,
    Iteration,
}

/// Ranks from one estimator run.
#[derive(Debug, Clone, Serialize)]
pub struct Estimate {
    pub method: Method,
    /// Unset for iteration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    pub damping: f64,
    pub ranks: RankMap<String>,
}

impl Estimate {
    #[must_use]
    pub fn sampled(samples: usize, damping: f64, ranks: RankMap<String>) -> Self {
        Self {
            method: Method::Sampling,
            samples: Some(samples),
            damping,
            ranks,
        }
    }

    #[must_use]
    pub fn iterated(damping: f64, ranks: RankMap<String>) -> Self {
        Self {
            method: Method::Iteration,
            samples: None,
            damping,
            ranks,
        }
    }

    /// Heading used by the text report.
    #[must_use]
    pub fn title(&self) -> String {
        match (self.method, self.samples) {
            (Method::Sampling, Some(n)) => format!("PageRank Results from Sampling (n = {n})"),
            (Method::Sampling, None) => "PageRank Results from Sampling".to_string(),
            (Method::Iteration, _) => "PageRank Results from Iteration".to_string(),
        }
    }
}

/// Everything one CLI invocation computed over a corpus.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub corpus: String,
    pub pages: usize,
    pub estimates: Vec<Estimate>,
}

use derive_more::{Add, AddAssign, Display};
use std::time::{Duration, Instant};

/// Collected search metrics.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Add, AddAssign)]
#[display(
    fmt = "time={}ms nodes={}|{:.0}/s terminals={}|{:.2}%",
    "self.time().as_millis()",
    "self.nodes()",
    "self.nps()",
    "self.terminals()",
    "self.terminal_rate() * 100."
)]
pub struct Metrics {
    time: Duration,
    nodes: u64,
    terminals: u64,
}

impl Metrics {
    /// Time elapsed.
    pub fn time(&self) -> Duration {
        self.time
    }

    /// Nodes counter.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Nodes visited per second.
    pub fn nps(&self) -> f64 {
        self.nodes() as f64 / self.time().as_secs_f64()
    }

    /// Terminal nodes counter.
    pub fn terminals(&self) -> u64 {
        self.terminals
    }

    /// Share of nodes that were terminal.
    pub fn terminal_rate(&self) -> f64 {
        self.terminals() as f64 / self.nodes() as f64
    }
}

/// A collector for search metrics.
#[derive(Debug)]
pub struct MetricsCounters {
    time: Instant,
    nodes: u64,
    terminals: u64,
}

impl Default for MetricsCounters {
    fn default() -> Self {
        MetricsCounters {
            time: Instant::now(),
            nodes: 0,
            terminals: 0,
        }
    }
}

impl MetricsCounters {
    /// Increment nodes counter.
    pub fn node(&mut self) -> u64 {
        self.nodes += 1;
        self.nodes
    }

    /// Increment terminal nodes counter.
    pub fn terminal(&mut self) -> u64 {
        self.terminals += 1;
        self.terminals
    }

    /// Returns the metrics collected.
    pub fn snapshot(&self) -> Metrics {
        Metrics {
            time: self.time.elapsed(),
            nodes: self.nodes,
            terminals: self.terminals,
        }
    }
}

use crate::algorithms::{bubble_sort, insertion_sort};
use crate::error::{Result, SorterError};
use crate::IntegerList;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Insertion,
    Bubble,
}

impl Algorithm {
    pub fn label(self) -> &'static str {
        match self {
            Self::Insertion => "Insert",
            Self::Bubble => "Bubble",
        }
    }

    fn apply(self, values: &mut [u32]) {
        match self {
            Self::Insertion => insertion_sort(values),
            Self::Bubble => bubble_sort(values),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Menu choice: one algorithm or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Insertion,
    Bubble,
    Both,
}

impl Selection {
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Self::Insertion => &[Algorithm::Insertion],
            Self::Bubble => &[Algorithm::Bubble],
            Self::Both => &[Algorithm::Insertion, Algorithm::Bubble],
        }
    }
}

impl FromStr for Selection {
    type Err = SorterError;

    /// Menu numbering: `1` insertion, `2` bubble, `3` both.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Self::Insertion),
            "2" => Ok(Self::Bubble),
            "3" => Ok(Self::Both),
            other => Err(SorterError::UnknownSelection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    pub selection: Selection,
    pub list: IntegerList,
}

impl SortRequest {
    pub fn new(selection: Selection, list: IntegerList) -> Self {
        Self { selection, list }
    }
}

/// One algorithm's result. `elapsed` covers only the sort itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub algorithm: Algorithm,
    pub sorted: IntegerList,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Running(Algorithm),
    Complete,
}

/// Runs a single algorithm over a list it owns, exactly once.
pub struct SortEngine {
    algorithm: Algorithm,
    values: IntegerList,
    state: EngineState,
    elapsed: Duration,
}

impl SortEngine {
    pub fn new(algorithm: Algorithm, values: IntegerList) -> Self {
        Self {
            algorithm,
            values,
            state: EngineState::Idle,
            elapsed: Duration::ZERO,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Sort in place and return the time spent sorting.
    pub fn run(&mut self) -> Result<Duration> {
        if self.state != EngineState::Idle {
            return Err(SorterError::EngineNotIdle);
        }

        let len = self.values.len();
        self.state = EngineState::Running(self.algorithm);
        let start = Instant::now();
        self.algorithm.apply(&mut self.values);
        self.elapsed = start.elapsed();
        self.state = EngineState::Complete;
        debug_assert_eq!(len, self.values.len());

        tracing::debug!(
            algorithm = self.algorithm.label(),
            len,
            elapsed_ns = self.elapsed.as_nanos() as u64,
            "sort complete"
        );
        Ok(self.elapsed)
    }

    pub fn into_outcome(self) -> Result<SortOutcome> {
        if self.state != EngineState::Complete {
            return Err(SorterError::EngineNotComplete);
        }

        Ok(SortOutcome {
            algorithm: self.algorithm,
            sorted: self.values,
            elapsed: self.elapsed,
        })
    }
}

/// Run every selected algorithm, each on its own copy of the original list.
pub fn execute(request: &SortRequest) -> Result<Vec<SortOutcome>> {
    request
        .selection
        .algorithms()
        .iter()
        .map(|&algorithm| {
            let mut engine = SortEngine::new(algorithm, request.list.clone());
            engine.run()?;
            engine.into_outcome()
        })
        .collect()
}

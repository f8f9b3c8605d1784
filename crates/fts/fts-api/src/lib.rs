//! Fuzzy Time Series Consumer API
//!
//! Serializable selectors for the models, partitioners and transformations
//! that the core registry can build.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use fts_spi::{
    DistributionMethod, Flrg, FtsError, FtsModel, FuzzySet, Interval, MembershipFunction,
    ModelState, Partition, Partitioner, ProbabilityDistribution, Result, Transformation,
};

/// Fuzzy time series method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Conventional FTS (Chen, 1996)
    Chen,
    /// Weighted FTS (Yu, 2005)
    Yu,
    /// Improved weighted FTS (Ismail & Efendi, 2013)
    ImprovedWeighted,
    /// High order FTS
    HighOrder,
    /// Interval FTS
    Interval,
    /// Probabilistic weighted FTS
    ProbabilisticWeighted,
}

impl ModelKind {
    /// Every method, in the order used for default benchmark pools.
    pub const ALL: [ModelKind; 6] = [
        ModelKind::Chen,
        ModelKind::Yu,
        ModelKind::ImprovedWeighted,
        ModelKind::HighOrder,
        ModelKind::Interval,
        ModelKind::ProbabilisticWeighted,
    ];

    /// Short name used in descriptor keys
    pub fn short_name(&self) -> &'static str {
        match self {
            ModelKind::Chen => "CFTS",
            ModelKind::Yu => "WFTS",
            ModelKind::ImprovedWeighted => "IWFTS",
            ModelKind::HighOrder => "HOFTS",
            ModelKind::Interval => "IFTS",
            ModelKind::ProbabilisticWeighted => "PWFTS",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for ModelKind {
    type Err = FtsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "chen" | "cfts" => Ok(ModelKind::Chen),
            "yu" | "wfts" => Ok(ModelKind::Yu),
            "improved_weighted" | "ismail_efendi" | "iwfts" => Ok(ModelKind::ImprovedWeighted),
            "high_order" | "hofts" => Ok(ModelKind::HighOrder),
            "interval" | "ifts" => Ok(ModelKind::Interval),
            "probabilistic_weighted" | "pwfts" => Ok(ModelKind::ProbabilisticWeighted),
            other => Err(FtsError::invalid("model", format!("unknown model '{}'", other))),
        }
    }
}

/// Partitioning scheme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PartitionerKind {
    /// Equal-width sets over the universe of discourse
    #[default]
    Grid,
    /// Distribution-based interval length (Huarng, 2001)
    Huarng,
}

impl PartitionerKind {
    /// Module name reported in descriptor keys
    pub fn module_name(&self) -> &'static str {
        match self {
            PartitionerKind::Grid => "Grid",
            PartitionerKind::Huarng => "Huarng",
        }
    }
}

impl fmt::Display for PartitionerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.module_name())
    }
}

impl FromStr for PartitionerKind {
    type Err = FtsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(PartitionerKind::Grid),
            "huarng" => Ok(PartitionerKind::Huarng),
            other => Err(FtsError::invalid(
                "partitioner",
                format!("unknown partitioner '{}'", other),
            )),
        }
    }
}

/// Shape of the membership functions a grid partitioner produces
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MembershipKind {
    #[default]
    Triangular,
    Trapezoidal,
    Gaussian,
}

/// Value transformation applied before fuzzification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransformationKind {
    /// First differences at the given lag
    Differential { lag: usize },
}

impl fmt::Display for TransformationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformationKind::Differential { lag } => write!(f, "Differential({})", lag),
        }
    }
}

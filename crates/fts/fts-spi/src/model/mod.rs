//! Model module containing fuzzy time series data structures.
//!
//! - [`MembershipFunction`] / [`FuzzySet`] - linguistic terms over the universe of discourse
//! - [`Partition`] - a fitted collection of fuzzy sets
//! - [`Flrg`] - fuzzy logical relationship group learned during training
//! - [`ModelState`] - mutable fitted state shared by every model
//! - [`Interval`] / [`ProbabilityDistribution`] - non-point forecast outputs

mod distribution;
mod flrg;
mod fuzzy_set;
mod interval;
mod membership;
mod partition;
mod state;

pub use distribution::{DistributionMethod, ProbabilityDistribution};
pub use flrg::Flrg;
pub use fuzzy_set::FuzzySet;
pub use interval::Interval;
pub use membership::MembershipFunction;
pub use partition::Partition;
pub use state::ModelState;

//! Fuzzy time series models.

mod chen;
mod hofts;
mod ifts;
mod ismail_efendi;
mod pwfts;
pub(crate) mod rules;
mod yu;

pub use chen::ChenFts;
pub use hofts::HighOrderFts;
pub use ifts::IntervalFts;
pub use ismail_efendi::ImprovedWeightedFts;
pub use pwfts::ProbabilisticWeightedFts;
pub use yu::WeightedFts;

use fts_spi::{FtsError, Result};

/// First-order models reject any other order.
pub(crate) fn require_first_order(order: usize) -> Result<()> {
    if order != 1 {
        return Err(FtsError::invalid(
            "order",
            format!("first order model cannot use order {}", order),
        ));
    }
    Ok(())
}

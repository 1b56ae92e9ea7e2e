//! One pure formula per metric
//!
//! Each function takes a [`ClassView`] and returns the raw value. Degenerate
//! inputs never divide by zero:
//!
//! - no methods: `0.0` everywhere
//! - one method: `0.0` for the LCOM, LCOM2, LCOM3 and LCOM5 ratios, `1.0` for
//!   the LCOM4 component count and the cohesion metrics
//! - a zero attribute / parameter-type denominator: `0.0`

mod components;
mod entropy;
mod lack;
mod pairwise;
mod reachability;
mod signature;

pub use entropy::shannon_entropy;

use super::{ClassView, MetricId};

/// Raw value of `metric` for the given view
pub fn evaluate(metric: MetricId, view: &ClassView<'_>) -> f64 {
    match metric {
        MetricId::Lcom => lack::lcom(view),
        MetricId::Camc => signature::camc(view),
        MetricId::Mmac => pairwise::mmac(view),
        MetricId::Lcom5 => lack::lcom5(view),
        MetricId::Lcom4 => components::lcom4(view),
        MetricId::Nhd => signature::nhd(view),
        MetricId::Lcom2 => lack::lcom2(view),
        MetricId::Lcom3 => lack::lcom3(view),
        MetricId::Scom => pairwise::scom(view),
        MetricId::Occ => reachability::occ(view),
        MetricId::Pcc => reachability::pcc(view),
        MetricId::Tcc => pairwise::tcc(view),
        MetricId::Lcc => components::lcc(view),
        MetricId::Ccm => components::ccm(view),
        MetricId::Mwe => entropy::mwe(view),
    }
}

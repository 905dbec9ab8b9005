pub mod calculator;
pub mod filter;
pub mod interpretations;
pub mod types;

pub use calculator::{bodies_from_response, compute_aspects, separation, AspectCalculator, BODY_ORDER};
pub use filter::{filter_aspects, AspectFilter, AspectSummary};
pub use interpretations::pair_interpretation;
pub use types::{Aspect, AspectKind, AspectNature};

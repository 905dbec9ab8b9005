pub mod grid;
pub mod houses;
pub mod layout;
pub mod normalize;

pub use grid::{ChartGrid, ChartKind};
pub use houses::{coerce_ascendant, sign_index_for_house, HouseProjection, HouseProjector};
pub use layout::{
    body_offsets, indicators_for, layout_diamond, BodyIndicator, HouseCell, HouseCellContent,
    PlacedBody, HOUSE_CELLS,
};
pub use normalize::{normalize_chart, resolve_sign_names};

pub mod offset;
pub mod outline;
pub mod simplify;

pub use offset::{ApproximateOffset, ExactOffset, OffsetStrategy, PolygonOffset2D};
pub use outline::BufferedOutline2D;
pub use simplify::RingSimplify2D;

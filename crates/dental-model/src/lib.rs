pub mod counts;
pub mod cycle;
pub mod error;
pub mod palette;
pub mod position;
pub mod record;

pub use counts::aggregate_counts;
pub use cycle::next_status;
pub use error::{ChartError, Result};
pub use palette::{PaletteEntry, StatusPalette, StatusStyle};
pub use position::{ChartMode, Dentition, ToothPosition};
pub use record::{SparseRecord, StatusMap};

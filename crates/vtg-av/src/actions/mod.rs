//! Media processing actions.

mod gif;

pub use gif::{
    apply_command, apply_filter, convert, palette_command, palette_filter, ConversionSummary,
};

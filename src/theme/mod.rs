//! Visual theme for the Cardsmith desktop app.

mod styles;

pub use styles::GLOBAL_STYLES;

#[macro_use]
extern crate log;

pub mod plot;

pub use plot::{bounds, plot_fit, sorted_by_x};

pub type Series = Vec<(f64, f64)>;

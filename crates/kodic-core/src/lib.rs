pub mod clean;
pub mod filter;

pub use clean::{clean_fragment, render_means};
pub use filter::WordFilter;

mod analyze;
pub use analyze::*;
mod complex;
pub use complex::*;
mod fft;
pub use fft::*;

pub mod category;
pub mod window;

pub use category::{NumberCategory, UnknownCategory};
pub use window::{NumberWindow, WindowSnapshot, DEFAULT_WINDOW_SIZE};

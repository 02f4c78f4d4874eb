pub mod lock;
pub mod progress;

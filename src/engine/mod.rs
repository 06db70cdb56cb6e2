pub mod gate;
pub mod pipeline;

pub use gate::{Gate, Identity};
pub use pipeline::Pipeline;

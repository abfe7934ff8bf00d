pub mod renderer;

pub use renderer::{Canvas, Renderer};

mod dialogue_box;
pub(crate) mod raster;
mod renderer;
pub(crate) mod text;

pub use renderer::Renderer;

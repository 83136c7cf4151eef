mod renderer;

pub use renderer::Renderer;

pub const CLEAR_COLOR: [u8; 4] = [20, 22, 28, 255];

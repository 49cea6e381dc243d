pub mod boat;
pub mod camera;
pub mod clock;
pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod mapper;
pub mod mesh;
pub mod panel;
pub mod ripples;
pub mod sim;
pub mod wave;

pub use boat::*;
pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use dispatcher::*;
pub use error::*;
pub use mapper::*;
pub use mesh::*;
pub use panel::*;
pub use ripples::*;
pub use sim::*;
pub use wave::*;

// Shaders bundled as string constants
pub static SURFACE_WGSL: &str = include_str!("../shaders/surface.wgsl");
pub static BOAT_WGSL: &str = include_str!("../shaders/boat.wgsl");

mod resolver;

pub use resolver::{is_directory, normalize, resolve};

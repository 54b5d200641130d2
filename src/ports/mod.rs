mod image_generator;
mod phase_renderer;
mod scheduler;

pub use image_generator::{GeneratedImage, ImageGenerator, ImageRequest};
pub use phase_renderer::{NoopRenderer, PhaseChange, PhaseRenderer};
pub use scheduler::{Clock, Scheduler, TimerToken};

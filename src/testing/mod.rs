pub mod fake_image_generator;
pub mod recording_renderer;

#[allow(unused_imports)]
pub use fake_image_generator::FakeImageGenerator;
#[allow(unused_imports)]
pub use recording_renderer::{RecordedFrame, RecordingRenderer};

pub mod clock;
pub mod imagen_client_http;
pub mod terminal_renderer;
pub mod timer_queue;

pub use clock::{ManualClock, SystemClock};
pub use imagen_client_http::HttpImagenClient;
pub use terminal_renderer::TerminalPhaseRenderer;
pub use timer_queue::TimerQueue;

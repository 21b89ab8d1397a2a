mod backend;
mod headless;

pub use backend::{OffscreenTarget, RenderError, RenderTarget, SceneBackend, SceneRenderer};
pub use headless::HeadlessRenderer;

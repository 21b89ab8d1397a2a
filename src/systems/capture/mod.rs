mod collect;
mod dispatch;

pub use collect::{capture_collect_system, record_outcome};
pub use dispatch::{
    capture_dispatch_system, deliver_inline, encode_outcome, primary_render_system, read_frame,
};

mod attitude;
mod input;

pub use attitude::{apply_manual_attitude, manual_attitude_system};
pub use input::{control_mapping_system, keyboard_input_system};

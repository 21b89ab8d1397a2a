pub mod components;
pub mod plugins;
pub mod rendering;
pub mod resources;
pub mod sim;
pub mod systems;
pub mod utils;

pub use sim::{FlightSim, FlightSimBuilder};

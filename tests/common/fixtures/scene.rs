use drone_flight::components::BoundingBox;
use nalgebra::Vector3;

/// Tall wall spanning `x_min..x_max` across the whole test area.
pub fn create_wall_x(x_min: f64, x_max: f64) -> BoundingBox {
    BoundingBox::new(
        Vector3::new(x_min, 0.0, -50.0),
        Vector3::new(x_max, 20.0, 50.0),
    )
}

pub fn create_wall_z(z_min: f64, z_max: f64) -> BoundingBox {
    BoundingBox::new(
        Vector3::new(-50.0, 0.0, z_min),
        Vector3::new(50.0, 20.0, z_max),
    )
}

/// Scalar replay of the hover model for a vehicle that only moves vertically.
pub fn reference_hover_altitudes(ticks: usize, dt: f64, desired_altitude: f64) -> Vec<f64> {
    let (gravity, lift_gain, damping, rate) = (-0.005, 0.05, 0.9, 60.0);
    let scale = dt * rate;
    let mut y = 0.0f64;
    let mut v = 0.0f64;
    let mut trace = Vec::with_capacity(ticks);
    for _ in 0..ticks {
        let a = gravity + (desired_altitude - y) * lift_gain;
        v += a * scale;
        v *= damping;
        y += v * scale;
        if y < 0.0 {
            y = 0.0;
            v = 0.0;
        }
        trace.push(y);
    }
    trace
}

mod camera;
mod collision;
mod controls;
mod scenario;

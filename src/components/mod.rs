pub mod autopilot;
pub mod camera;
pub mod capture;
pub mod collision;
pub mod controller;
pub mod vehicle;

pub use autopilot::{
    Autopilot, AutopilotCommand, AutopilotGoal, AutopilotPhase, DetectionResponse, TargetBox,
    TravelDirection,
};
pub use camera::{
    CameraPose, CameraRig, CameraSelection, CameraToggle, CameraView, RigCamera,
    ToggleCameraView, UnknownCameraToggle,
};
pub use capture::{
    encode_jpeg, flip_rows, CaptureError, CaptureOutcome, CapturePipeline, CaptureSlot,
    CaptureStats, CapturedFrame, FrameFormat, RawFrame,
};
pub use collision::{BoundingBox, CollisionEvent, CollisionState, Obstacle};
pub use controller::{
    ControlAxes, ControlAxis, ControlInputEvent, ControlKey, HeldInputs, KeyBinding,
    UnknownControl,
};
pub use vehicle::{LastSafePose, Orientation, VehicleState, VehicleTelemetry};

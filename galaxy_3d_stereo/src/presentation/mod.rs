/// Presentation module - controller driving the active stereo strategy

mod controller;

pub use controller::{StereoPresentationController, PresentationState};

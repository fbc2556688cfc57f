pub mod clock;
pub mod controller;
pub mod input_adapter;
pub mod timer;

pub use clock::{clamp_delta, Clock, MAX_FRAME_DELTA};
pub use controller::{Button, Controller};
pub use input_adapter::WinitController;
pub use timer::{Accumulator, FixedHz};

//! Platform abstraction layer
//!
//! Everything the engine needs from its host:
//! - Time (`Clock`)
//! - Input events (`ControlEvent`)
//! - Drawing and HUD output (`Presenter`)

pub mod clock;
pub mod input;
pub mod presenter;

pub use clock::{Clock, ManualClock};
#[cfg(not(target_arch = "wasm32"))]
pub use clock::SystemClock;
pub use input::{ControlEvent, Controls, Direction};
pub use presenter::{DrawCall, Presenter, RecordingPresenter};

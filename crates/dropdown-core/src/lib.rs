//! State machine for a single-selection dropdown.
//!
//! Rendering, positioning, scrolling and click-outside detection live in the
//! host; this crate only decides what is open, what is highlighted and when a
//! value is handed back to the caller.

pub mod controller;
pub mod error;
pub mod focus;
pub mod keyboard;
pub mod open_state;
pub mod option_set;
pub mod props;
pub mod value_sync;

pub use controller::{Dropdown, OptionView, RenderModel, Transition};
pub use error::FocusError;
pub use focus::{FocusSurface, Viewport};
pub use keyboard::{Key, Navigation};
pub use open_state::{CloseReason, OpenState};
pub use option_set::{DropdownOption, Label, LabelSegment, OptionSet, SegmentStyle};
pub use props::{Decor, DropdownProps, GroupPosition};

//! wordhop - word-wise cursor navigation for mixed CJK and Latin text
//!
//! The host editor implements [`document::LineSource`] over its buffer,
//! shares one [`segment::SegmentationService`] process-wide, and calls
//! [`movement::BoundarySearch`] per cursor motion. Applying the returned
//! positions and consumable ranges to selections and buffers stays on the
//! host's side.

pub mod document;
pub mod error;
pub mod movement;
pub mod position;
pub mod segment;

pub use document::{Document, LineSource};
pub use error::{ErrorKind, NavError, Result};
pub use movement::{BoundarySearch, Jump};
pub use position::{Position, Range};
pub use segment::SegmentationService;

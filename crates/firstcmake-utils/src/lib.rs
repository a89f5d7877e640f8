//! firstcmake-utils: Small utilities behind the FirstCMake showcase.
//!
//! The library is a handful of free functions plus the session flow that
//! drives them:
//!
//! - **numeric**: `add` over any primitive integer or float
//! - **text**: ASCII uppercase mapping
//! - **printer**: titled, 1-indexed listing of displayable items
//! - **features**: the fixed feature list and its substring filter
//! - **banner**: the welcome banner
//! - **session**: the interactive console flow, generic over reader/writer
//!
//! # Example
//!
//! ```
//! use firstcmake_utils::{add, to_upper};
//!
//! assert_eq!(add(5, 3), 8);
//! assert_eq!(to_upper("bob"), "BOB");
//! ```

pub mod banner;
pub mod config;
pub mod error;
pub mod features;
pub mod numeric;
pub mod printer;
pub mod session;
pub mod text;

pub use banner::*;
pub use config::*;
pub use error::*;
pub use features::*;
pub use numeric::*;
pub use printer::*;
pub use session::*;
pub use text::*;

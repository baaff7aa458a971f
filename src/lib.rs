//! Color harmony palettes: derive a small ordered set of related colors from
//! a base color and a harmony rule.

pub mod color;
pub use color::*;

pub mod rule;
pub use rule::*;

pub mod palette;
pub use palette::*;

pub mod random;
pub use random::*;

pub mod render;
pub use render::*;

pub mod file;
pub use file::*;

mod error;
pub use error::*;

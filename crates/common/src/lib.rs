pub mod iter;
mod macros;
mod span;

pub use span::{Span, Spanned};

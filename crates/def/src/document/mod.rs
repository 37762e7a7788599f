mod path;

pub use path::{is_reserved_word, Error, Path, PathFragment, Result, RESERVED_WORDS};

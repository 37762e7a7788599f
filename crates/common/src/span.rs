/// Byte range of a token or a construct in the source text, both ends included.
pub type Span = std::ops::RangeInclusive<usize>;

/// A value tagged with the location it was read from.
///
/// Two spanned values compare equal when their values do, wherever they came from.
#[derive(Debug, Clone)]
pub struct Spanned<T>(pub T, pub Span);

impl<T> Spanned<T> {
    pub fn span(&self) -> Span {
        self.1.clone()
    }

    pub fn into_value(self) -> T {
        self.0
    }
}

impl<T: PartialEq> PartialEq for Spanned<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

//! An iterator adapter that can look any number of items ahead, in the spirit of
//! `itertools::multipeek`, plus the conditional advancing helpers a parser needs.
use std::{collections::VecDeque, iter::Fuse};

pub struct MultiPeekable<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    buf: VecDeque<I::Item>,
}

pub trait MultiPeek: Iterator + Sized {
    fn multi_peekable(self) -> MultiPeekable<Self>;
}

impl<I: Iterator> MultiPeek for I {
    fn multi_peekable(self) -> MultiPeekable<I> {
        MultiPeekable {
            iter: self.fuse(),
            buf: VecDeque::new(),
        }
    }
}

impl<I: Iterator> MultiPeekable<I> {
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.peek_nth(0)
    }

    /// Returns the `n`-th upcoming item (0-based) without consuming anything.
    pub fn peek_nth(&mut self, n: usize) -> Option<&I::Item> {
        let missing = (n + 1).saturating_sub(self.buf.len());
        self.buf.extend(self.iter.by_ref().take(missing));

        self.buf.get(n)
    }

    pub fn next_if(&mut self, func: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        if self.peek().map_or(false, func) {
            self.next()
        } else {
            None
        }
    }

    /// Consumes the next `n` items only if every one of them satisfies `func`,
    /// which receives each item together with its offset. Returns the last
    /// consumed item.
    pub fn advance_n_if_each(
        &mut self,
        n: usize,
        func: impl Fn((usize, &I::Item)) -> bool,
    ) -> Option<I::Item> {
        if n == 0 {
            return None;
        }

        for i in 0..n {
            match self.peek_nth(i) {
                Some(item) if func((i, item)) => {}
                _ => return None,
            }
        }

        self.buf.drain(..n).last()
    }
}

impl<I> Iterator for MultiPeekable<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.pop_front().or_else(|| self.iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.iter.size_hint();
        (
            low.saturating_add(self.buf.len()),
            high.and_then(|high| high.checked_add(self.buf.len())),
        )
    }
}

impl<I> ExactSizeIterator for MultiPeekable<I> where I: ExactSizeIterator {}

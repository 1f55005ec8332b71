use std::sync::Arc;

/// A lazy, possibly infinite sequence.
///
/// A suspension stands for more work; forcing it yields the rest of
/// the stream. Forcing only ever happens in loops, so arbitrarily many
/// suspensions in a row do not grow the call stack.
pub enum Stream<T> {
    Empty,
    Pair(T, Box<Stream<T>>),
    Suspension(Box<dyn FnOnce() -> Stream<T>>),
}

impl<T> Stream<T> {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn singleton(x: T) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    pub fn cons(a: T, d: Self) -> Self {
        Stream::Pair(a, Box::new(d))
    }

    pub fn suspension(sup: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Suspension(Box::new(sup))
    }

    pub fn from_iter(iter: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Stream::Empty, |d, a| Stream::cons(a, d))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Number of elements, or `None` if a suspension is reached first.
    pub fn len(&self) -> Option<usize> {
        let mut n = 0;
        let mut s = self;
        loop {
            match s {
                Stream::Empty => return Some(n),
                Stream::Pair(_, d) => {
                    n += 1;
                    s = d;
                }
                Stream::Suspension(_) => return None,
            }
        }
    }

    /// Force suspensions until at least one element or the end is reached.
    pub fn mature(mut self) -> Self {
        while let Stream::Suspension(sup) = self {
            self = sup();
        }
        self
    }

    /// Collect at most `n` elements.
    pub fn take_inf(self, n: usize) -> Vec<T> {
        self.into_iter().take(n).collect()
    }

    /// Collect all elements. Does not return for infinite streams.
    pub fn take_inf_all(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T> std::iter::IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        StreamIter(self)
    }
}

impl<T: 'static> Stream<T> {
    /// Interleaving append.
    ///
    /// Whenever `s` is suspended, the operands swap places so that an
    /// infinite `s` cannot starve `t`.
    pub fn append_inf(s: Stream<T>, t: Stream<T>) -> Self {
        match s {
            Stream::Empty => t,
            Stream::Pair(a, d) => Stream::cons(a, Stream::append_inf(*d, t)),
            Stream::Suspension(sup) => Stream::suspension(|| Stream::append_inf(t, sup())),
        }
    }

    /// Apply `g` to every element and merge the resulting streams.
    pub fn append_map_inf(self, g: Arc<dyn Fn(T) -> Self>) -> Self {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Pair(a, d) => Stream::append_inf(g(a), d.append_map_inf(g)),
            Stream::Suspension(sup) => Stream::suspension(|| sup().append_map_inf(g)),
        }
    }

    pub fn map<U: 'static>(self, f: impl 'static + Fn(T) -> U) -> Stream<U> {
        match self {
            Stream::Empty => Stream::empty(),
            Stream::Pair(a, d) => Stream::cons(f(a), d.map(f)),
            Stream::Suspension(sup) => Stream::suspension(|| sup().map(f)),
        }
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        use Stream::*;
        match (self, other) {
            (Empty, Empty) => true,
            (Pair(a, x), Pair(b, y)) => a == b && x == y,
            _ => false,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Suspension(_) => write!(f, "(...)"),
            Stream::Pair(x, next) => {
                let mut next = next;
                write!(f, "({:?}", x)?;
                loop {
                    match &**next {
                        Stream::Empty => break,
                        Stream::Pair(x, n) => {
                            write!(f, " {:?}", x)?;
                            next = n;
                        }
                        Stream::Suspension(_) => {
                            write!(f, " ...")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

pub struct StreamIter<T>(Stream<T>);

impl<T> Iterator for StreamIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.0, Stream::Empty) {
                Stream::Empty => return None,
                Stream::Pair(a, d) => {
                    self.0 = *d;
                    return Some(a);
                }
                Stream::Suspension(sup) => self.0 = sup(),
            }
        }
    }
}

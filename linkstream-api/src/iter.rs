pub type BoxedIter<T> = Box<dyn Iterator<Item = T> + Send + Sync>;
pub type BoxedLIter<'a, T> = Box<dyn Iterator<Item = T> + Send + Sync + 'a>;

/// Common interface of keyed containers.
///
/// `Collection` implements this; wrapper types can implement it by delegating
/// to an inner collection and then be used anywhere a `Container` is expected.
pub trait Container {
    type Value;

    fn set(&mut self, key: String, value: Self::Value) -> &mut Self;
    fn get(&self, key: &str) -> Option<&Self::Value>;
    fn has(&self, key: &str) -> bool;
    fn remove(&mut self, key: &str) -> &mut Self;
    fn clear(&mut self) -> &mut Self;
    fn count(&self) -> usize;
    fn keys(&self) -> Vec<&str>;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

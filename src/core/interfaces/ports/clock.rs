pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

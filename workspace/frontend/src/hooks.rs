/// State machine for a page's single outstanding fetch. `NotStarted` only
/// exists before the mount effect runs; afterwards the state is `Loading`
/// until the response lands.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

pub mod detail;
pub mod summary;

/// Fetch lifecycle for a view. Every view starts out `Loading`; a fetch moves
/// it to `Loaded` or `Failed`, and a refetch resets it to `Loading`.
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

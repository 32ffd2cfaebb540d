/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async catalog SDK. Dispatches blocking upstream calls and
    /// favorites writes to a thread pool internally.
    pub sdk: tcgdex_catalog::AsyncCatalogSdk,
}

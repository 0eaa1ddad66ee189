use crate::FeedPage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Screen opened, or the user cleared the search box (`force_refresh`).
    LoadRecent { force_refresh: bool },
    /// User submitted a search query.
    Search(String),
    /// Grid reported the indices currently on screen.
    ScrollPositionChanged(Vec<usize>),
    /// A page fetch acquired the in-flight slot and is about to hit the network.
    FetchStarted,
    /// The in-flight fetch succeeded.
    PageLoaded(FeedPage),
    /// The in-flight fetch failed after retries.
    PageFailed,
    /// The in-flight fetch was abandoned because its owner shut down.
    FetchCancelled,
}

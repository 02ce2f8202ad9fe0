/// Presentation and query defaults for the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Device and client listings stop after this many entries.
    pub max_listed_items: usize,
    /// Client lookback window used when a tool call omits `timespan`.
    pub default_timespan_secs: u32,
}

impl ServerConfig {
    pub const DEFAULT_MAX_LISTED_ITEMS: usize = 25;
    pub const DEFAULT_TIMESPAN_SECS: u32 = 86_400;
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_listed_items: Self::DEFAULT_MAX_LISTED_ITEMS,
            default_timespan_secs: Self::DEFAULT_TIMESPAN_SECS,
        }
    }
}

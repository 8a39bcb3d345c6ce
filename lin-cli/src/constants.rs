// ABOUTME: Centralized constants for the lin CLI
// ABOUTME: File locations, default list limits and user-facing fixed strings

/// Local files owned by the CLI
pub mod files {
    /// Marker naming the workspace for a directory tree
    pub const MARKER_FILE: &str = ".linear-workspace";

    /// Directory under the home directory holding the config file
    pub const CONFIG_DIR: &str = ".linear-cli";

    pub const CONFIG_FILE: &str = "config.json";
}

/// Workspace used when nothing else names one
pub const DEFAULT_WORKSPACE: &str = "default";

/// Ancestor directories searched for a marker before giving up
pub const MAX_MARKER_DEPTH: usize = 256;

/// Default limits for list queries
pub mod limits {
    pub const DEFAULT_ISSUE_LIMIT: i32 = 20;
    pub const DEFAULT_PROJECT_LIMIT: i32 = 50;
    pub const DEFAULT_TEAM_LIMIT: i32 = 50;
    pub const DEFAULT_USER_LIMIT: i32 = 50;
}

/// Formatting widths
pub mod ui {
    pub const SEARCH_TITLE_WIDTH: usize = 50;
}

/// Attachment handling
pub mod attachments {
    pub const SUBTITLE: &str = "Uploaded via Linear CLI";
}

// =============================================================================
// Application Identity
// =============================================================================

/// Application name in lowercase (for paths, identifiers and log targets)
pub const APP_NAME_LOWER: &str = "gridfilter";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "gridfilter.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "GRIDFILTER_CONFIG";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "GRIDFILTER_LOG";

/// Environment variable for the column list (`id[:label],...`)
pub const ENV_COLUMNS: &str = "GRIDFILTER_COLUMNS";

/// Environment variable for the commit output format
pub const ENV_FORMAT: &str = "GRIDFILTER_FORMAT";

// =============================================================================
// Session Defaults
// =============================================================================

/// Prompt printed before each command when prompting is enabled
pub const PROMPT: &str = "> ";

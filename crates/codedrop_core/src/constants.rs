//! Shared constants used across CodeDrop crates.

use std::time::Duration;

/// Default backend base URL when `CODEDROP_API_HOST` is unset.
pub const DEFAULT_API_HOST: &str = "http://localhost:8080";

/// Scheme assumed when the configured host carries none.
pub const DEFAULT_SCHEME: &str = "https://";

/// Header carrying the static access token on every API request.
pub const ACCESS_TOKEN_HEADER: &str = "X-CodeDrop-Token";

/// Shared access token expected by the backend. Not a secret.
pub const ACCESS_TOKEN: &str = "secure-access-v1";

/// Time-to-live sent with every new paste (7 days).
pub const PASTE_TTL_SECONDS: u64 = 604_800;

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How long the copy button shows its "copied" label.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2_000);

/// Preference key for the persisted theme.
pub const THEME_KEY: &str = "cd_theme";

/// Preference key for the persisted locale.
pub const LOCALE_KEY: &str = "cd_lang";

/// Upper bound for paste content accepted by the development backend (1 MiB).
pub const MAX_CONTENT_BYTES: usize = 1 << 20;

/// Shortest TTL accepted by the development backend.
pub const MIN_TTL_SECONDS: u64 = 60;

/// Longest TTL accepted by the development backend (one year).
pub const MAX_TTL_SECONDS: u64 = 31_536_000;

/// Length of identifiers minted by the development backend.
pub const PASTE_ID_LEN: usize = 8;

/// Identifiers longer than this are rejected before lookup.
pub const MAX_PASTE_ID_LEN: usize = 10;

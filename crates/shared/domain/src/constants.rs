/// Prefix for environment overrides (`RIDGE__SERVER__PORT=8080`).
pub const ENV_PREFIX: &str = "RIDGE";
/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Config file stem looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "demo";
/// Environment variable pointing at an explicit config file.
pub const CONFIG_PATH_VAR: &str = "RIDGE_CONFIG";

pub const ALPINE_CDN: &str = "https://cdn.jsdelivr.net/npm/alpinejs@3.14.3/dist/cdn.js";
pub const ALPINE_MASK_CDN: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/alpinejs-mask/3.14.3/cdn.js";
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

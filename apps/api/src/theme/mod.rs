// Color theme derivation for the résumé presentation layer.
// Everything below `handlers` is pure and synchronous.

pub mod color;
pub mod deriver;
pub mod handlers;
pub mod luminance;
pub mod palettes;
pub mod registry;
pub mod render;
pub mod tokens;
pub mod transform;
pub mod validation;

// Re-export the public API consumed by other modules (state, routes, errors).
pub use color::{Color, ThemeError};
pub use deriver::derive_theme_from_hex;
pub use registry::ThemeRegistry;
pub use tokens::{Role, TextRole, ThemeTokenSet};
pub use validation::{check_contrast, validate_theme, ContrastReport, ThemeValidation};

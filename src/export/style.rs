//! Drawing palette and typefaces.

/// Darkest slate (panel faces, outlines).
pub const SLATE_900: &str = "#0f172a";
/// Primary line and text color.
pub const SLATE_800: &str = "#1e293b";
/// Secondary text.
pub const SLATE_600: &str = "#475569";
/// Title block labels, rail detail.
pub const SLATE_500: &str = "#64748b";
/// Extension lines and muted labels.
pub const SLATE_400: &str = "#94a3b8";
/// Room outline, inactive center lines.
pub const SLATE_300: &str = "#cbd5e1";
/// Panel fill in front view, rail body.
pub const SLATE_200: &str = "#e2e8f0";
/// Background tint.
pub const SLATE_100: &str = "#f1f5f9";
/// Center-line crosshair.
pub const RED_500: &str = "#ef4444";
/// Eye-level guides.
pub const BLUE_500: &str = "#3b82f6";
/// Camera guide.
pub const GREEN_500: &str = "#22c55e";
/// Paper.
pub const WHITE: &str = "#ffffff";
/// Flushboxes.
pub const ORANGE_500: &str = "#f97316";
/// Brackets seen through the display in front view.
pub const GHOST: &str = "#94a3b8";

/// Proportional face for titles and labels.
pub const FONT_SANS: &str = "Inter, system-ui, sans-serif";
/// Monospace face for dimensions and title block values.
pub const FONT_MONO: &str = "JetBrains Mono, ui-monospace, monospace";

/// Dash pattern of the center-line crosshair.
pub const CENTER_LINE_DASH: &str = "20,15,5,15";
/// Dash pattern of extension lines.
pub const EXTENSION_DASH: &str = "15,15";
/// Dash pattern of ghosted outlines.
pub const GHOST_DASH: &str = "12,12";

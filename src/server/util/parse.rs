use crate::server::error::template::TemplateError;

const MAX_COLOR: u32 = 0xFF_FF_FF;

/// Parses a 24-bit RGB role color from a hex string.
///
/// Accepts `0x3498db`, `#3498db` and bare `3498db`, in either letter case.
///
/// # Arguments
/// - `value` - Hex color string from a template document
///
/// # Returns
/// - `Ok(u32)` - Parsed color
/// - `Err(TemplateError::InvalidColor)` - Not a hexadecimal number
/// - `Err(TemplateError::ColorOutOfRange)` - Value exceeds `0xffffff`
pub fn parse_color(value: &str) -> Result<u32, TemplateError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('#'))
        .unwrap_or(trimmed);

    let color = u32::from_str_radix(digits, 16).map_err(|e| TemplateError::InvalidColor {
        value: value.to_string(),
        source: e,
    })?;

    if color > MAX_COLOR {
        return Err(TemplateError::ColorOutOfRange(value.to_string()));
    }

    Ok(color)
}

/// Formats a role color as written by backups, e.g. `0x3498db`.
pub fn format_color(color: u32) -> String {
    format!("0x{:06x}", color & MAX_COLOR)
}

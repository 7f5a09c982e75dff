use crate::shared::constants;

/// Formats `seconds` as `MM_SS_mmm`.
///
/// Every field is truncated, never rounded. Minutes are padded to two digits
/// but grow past 99 instead of wrapping.
pub fn format_timestamp(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    let millis = ((seconds % 1.0) * 1000.0).floor() as u64;
    format!("{:02}_{:02}_{:03}", minutes, secs, millis)
}

/// File name for a frame captured `seconds` into the stream, e.g.
/// `frame_00_01_500.png`.
pub fn frame_file_name(seconds: f64) -> String {
    format!(
        "{}{}.{}",
        constants::FRAME_FILE_PREFIX,
        format_timestamp(seconds),
        constants::FRAME_FILE_EXTENSION
    )
}

/// Inverse of [`frame_file_name`]. Returns the encoded timestamp in seconds.
pub fn parse_frame_file_name(name: &str) -> Option<f64> {
    let stem = name
        .strip_prefix(constants::FRAME_FILE_PREFIX)?
        .strip_suffix(constants::FRAME_FILE_EXTENSION)?
        .strip_suffix('.')?;

    let mut parts = stem.split('_');
    let minutes: u64 = parts.next()?.parse().ok()?;
    let secs: u64 = parts.next()?.parse().ok()?;
    let millis: u64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || secs >= 60 || millis >= 1000 {
        return None;
    }

    Some(minutes as f64 * 60.0 + secs as f64 + millis as f64 / 1000.0)
}

// Pure display formatters. Every function here is total: bad numbers render a
// zero value and unparseable instants are echoed back.

pub mod artist;
pub mod calendar;
pub mod duration;
pub mod instant;
pub mod relative;
pub mod truncate;
pub mod zone;

pub use artist::{format_artist_names, ArtistNames, DEFAULT_DELIMITER};
pub use calendar::{
    format_date_time, format_date_time_in, format_fields, FieldOptions, FormatPreset,
    MonthStyle, NumericStyle, TextStyle,
};
pub use duration::{
    calculate_total_duration, format_duration, format_duration_human, ms_to_seconds,
    seconds_to_ms,
};
pub use instant::Instant;
pub use relative::{format_relative_time, format_relative_time_at, RelativeTime, RelativeUnit};
pub use truncate::{truncate_text, truncate_text_end, truncate_text_middle, TruncationPolicy};
pub use zone::{default_zone, set_default_zone, Zone};

// Artist credit joining ("Kendrick Lamar, SZA").

pub const DEFAULT_DELIMITER: &str = ", ";

/// One credited name or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistNames {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for ArtistNames {
    fn from(name: &str) -> Self {
        ArtistNames::Single(name.to_string())
    }
}

impl From<String> for ArtistNames {
    fn from(name: String) -> Self {
        ArtistNames::Single(name)
    }
}

impl From<Vec<String>> for ArtistNames {
    fn from(names: Vec<String>) -> Self {
        ArtistNames::Many(names)
    }
}

impl From<Vec<&str>> for ArtistNames {
    fn from(names: Vec<&str>) -> Self {
        ArtistNames::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ArtistNames {
    fn from(names: &[&str]) -> Self {
        ArtistNames::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ArtistNames {
    fn from(names: [&str; N]) -> Self {
        ArtistNames::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

/// Join artist names with `delimiter`. A single name is returned untouched;
/// blank entries in a list are skipped.
pub fn format_artist_names(artists: impl Into<ArtistNames>, delimiter: &str) -> String {
    match artists.into() {
        ArtistNames::Single(name) => name,
        ArtistNames::Many(names) => names
            .iter()
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
            .collect::<Vec<_>>()
            .join(delimiter),
    }
}

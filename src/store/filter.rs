/// Location filter for list queries.
///
/// `Unspecified` applies no filter, `Root` keeps only rows without a parent
/// (folders) or without a folder (files), `Id` keeps exact matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationFilter {
    #[default]
    Unspecified,
    Root,
    Id(String),
}

impl LocationFilter {
    /// Interprets a raw query parameter. `root`, `null` and the empty string
    /// all select the root level.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None => LocationFilter::Unspecified,
            Some("") | Some("root") | Some("null") => LocationFilter::Root,
            Some(id) => LocationFilter::Id(id.to_string()),
        }
    }

    pub fn matches(&self, location: Option<&str>) -> bool {
        match self {
            LocationFilter::Unspecified => true,
            LocationFilter::Root => location.is_none(),
            LocationFilter::Id(id) => location == Some(id.as_str()),
        }
    }
}

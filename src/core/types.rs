/// Which matches the downstream enumeration stage should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Matches unique in both the reference and query
    Mum,
    /// Matches unique in the reference but not necessarily in the query
    MumReference,
    /// All maximal matches regardless of their uniqueness
    MaxMatch,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mum => write!(f, "mum"),
            Self::MumReference => write!(f, "mumreference"),
            Self::MaxMatch => write!(f, "maxmatch"),
        }
    }
}

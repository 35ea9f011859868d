use crate::core::types::MatchMode;

/// Minimum match length used when `-l` is not given.
pub const DEFAULT_MIN_MATCH_LENGTH: u32 = 20;

/// Immutable record of the mode flags and parameters for one invocation.
///
/// Built once from the parsed command line and read-only thereafter. The
/// three match-mode flags are stored independently, matching the historical
/// CLI where they were never mutually exclusive; [`RunConfiguration::match_mode`]
/// resolves them into a single mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Compute matches unique in both the reference and query (`-mum`)
    pub mum: bool,

    /// Compute matches unique in the reference only (`-mumreference`)
    pub mum_reference: bool,

    /// Compute all maximal matches regardless of uniqueness (`-maxmatch`)
    pub max_match: bool,

    /// Only match the characters a, c, g, or t, case insensitive (`-n`)
    pub nucleotides_only: bool,

    /// Minimum match length (`-l`), always >= 1
    pub min_match_length: u32,

    /// Compute both forward and reverse complement matches (`-b`)
    pub both_strands: bool,

    /// Only compute reverse complement matches (`-r`)
    pub reverse_complement_only: bool,

    /// Show the matching substring in the output (`-s`)
    pub show_substring: bool,

    /// Report reverse complement positions relative to the forward strand (`-c`)
    pub forward_relative_offsets: bool,

    /// Four column output, prefixed with the reference sequence id (`-F`)
    pub four_column_output: bool,

    /// Show the query length on its own header line (`-L`)
    pub show_query_length: bool,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            mum: false,
            mum_reference: false,
            max_match: false,
            nucleotides_only: false,
            min_match_length: DEFAULT_MIN_MATCH_LENGTH,
            both_strands: false,
            reverse_complement_only: false,
            show_substring: false,
            forward_relative_offsets: false,
            four_column_output: false,
            show_query_length: false,
        }
    }
}

impl RunConfiguration {
    /// Number of match-mode flags that were set.
    #[must_use]
    pub fn mode_flag_count(&self) -> usize {
        usize::from(self.mum) + usize::from(self.mum_reference) + usize::from(self.max_match)
    }

    /// Resolve the match-mode flags into a single mode.
    ///
    /// When several mode flags are set, the most restrictive wins
    /// (mum > mumreference > maxmatch). When none is set, the default is
    /// reference-unique matching, as `mummer` has always documented.
    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        if self.mum {
            MatchMode::Mum
        } else if self.mum_reference {
            MatchMode::MumReference
        } else if self.max_match {
            MatchMode::MaxMatch
        } else {
            MatchMode::MumReference
        }
    }
}

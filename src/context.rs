/// Values available to one template substitution run.
/// Built fresh for every query and thrown away afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionContext {
    /// Search terms, already percent-encoded.
    pub search_terms: String,
    /// The engine's query charset.
    pub charset: String,
    /// Current locale, empty when unknown.
    pub locale: String,
}

impl SubstitutionContext {
    pub fn new(
        search_terms: impl Into<String>,
        charset: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            search_terms: search_terms.into(),
            charset: charset.into(),
            locale: locale.into(),
        }
    }
}

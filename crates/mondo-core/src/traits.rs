// crates/mondo-core/src/traits.rs
use crate::model::SearchItem;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a display name.
///
/// Comparisons are accent- and case-insensitive through [`fold_key`].
///
/// # Examples
/// ```rust
/// use mondo_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Curaçao").is_named("curacao"));
/// assert!(Place("Zürich").name_contains("ZURI"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Substring match on the folded name.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_contains_folded(&fold_key(q))
    }

    /// Like [`NameMatch::name_contains`] for a query already passed through
    /// [`fold_key`].
    #[inline]
    fn name_contains_folded(&self, folded_q: &str) -> bool {
        fold_key(self.name_str()).contains(folded_q)
    }
}

impl NameMatch for SearchItem {
    fn name_str(&self) -> &str {
        &self.name
    }
}

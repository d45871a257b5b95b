//! Fixed option sets shared by the filter panel and the call form.

/// An enumerated value that is picked from an HTML `select`.
///
/// `value` is the exact string carried on the wire and in the `option`
/// element; `from_value` is its inverse.
pub trait SelectOption: Sized + Copy + PartialEq + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    fn value(&self) -> &'static str;

    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.value() == value)
    }
}

//! Labeled fragments.

/// The label of a fragment.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Label {
    /// The fragment surrounds an annotated splice site.
    True,

    /// The fragment surrounds a motif occurrence that is not an annotated
    /// splice site.
    False,
}

impl From<bool> for Label {
    fn from(value: bool) -> Self {
        match value {
            true => Label::True,
            false => Label::False,
        }
    }
}

impl From<Label> for bool {
    fn from(label: Label) -> Self {
        matches!(label, Label::True)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::True => write!(f, "1"),
            Label::False => write!(f, "0"),
        }
    }
}

/// A labeled, fixed-width window of nucleotides.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Fragment {
    /// The label.
    label: Label,

    /// The nucleotides.
    content: String,
}

impl Fragment {
    /// Creates a new [`Fragment`].
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::fragment::Fragment;
    /// use splicefrag::fragment::Label;
    ///
    /// let fragment = Fragment::new(Label::True, "TTGTC");
    /// assert_eq!(fragment.label(), Label::True);
    /// assert_eq!(fragment.content(), "TTGTC");
    /// assert_eq!(fragment.to_string(), "1\nTTGTC");
    /// ```
    pub fn new(label: Label, content: impl Into<String>) -> Self {
        Self {
            label,
            content: content.into(),
        }
    }

    /// Gets the label.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Gets the nucleotides.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consumes `self` and returns the label and the nucleotides.
    pub fn into_parts(self) -> (Label, String) {
        (self.label, self.content)
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.label, self.content)
    }
}

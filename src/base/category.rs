/// Depth in the three-level category hierarchy. `Root` sits above every label.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum Level {
    #[default]
    Root,
    Label,
    SubLabel,
    MicroLabel,
}

impl Level {
    pub fn deeper(self) -> Option<Self> {
        match self {
            Level::Root => Some(Level::Label),
            Level::Label => Some(Level::SubLabel),
            Level::SubLabel => Some(Level::MicroLabel),
            Level::MicroLabel => None,
        }
    }

    pub fn shallower(self) -> Option<Self> {
        match self {
            Level::Root => None,
            Level::Label => Some(Level::Root),
            Level::SubLabel => Some(Level::Label),
            Level::MicroLabel => Some(Level::SubLabel),
        }
    }
}

/// Position of a feedback item in the label / sub label / micro label
/// hierarchy. A sub label only has meaning under its label, and a micro label
/// only under its sub label.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    label: String,
    sub_label: String,
    micro_label: String,
}

impl Category {
    pub const UNCATEGORIZED: &str = "Uncategorized";
    pub const SEP: &str = " > ";

    /// Builds a category, substituting [`Self::UNCATEGORIZED`] for any blank
    /// part.
    pub fn new(label: &str, sub_label: &str, micro_label: &str) -> Self {
        fn or_default(s: &str) -> String {
            match s.trim() {
                "" => Category::UNCATEGORIZED.to_string(),
                s => s.to_string(),
            }
        }
        Self {
            label: or_default(label),
            sub_label: or_default(sub_label),
            micro_label: or_default(micro_label),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn sub_label(&self) -> &str {
        &self.sub_label
    }

    pub fn micro_label(&self) -> &str {
        &self.micro_label
    }

    /// Returns the key this category is grouped under when viewing the
    /// children of `level`: labels at the root, sub labels under a label, and
    /// micro labels under a sub label. Micro labels are leaves, so they have
    /// no children to group.
    pub fn child_key(&self, level: Level) -> Option<&str> {
        match level {
            Level::Root => Some(self.label.as_str()),
            Level::Label => Some(self.sub_label.as_str()),
            Level::SubLabel => Some(self.micro_label.as_str()),
            Level::MicroLabel => None,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::new("", "", "")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.label,
            Self::SEP,
            self.sub_label,
            Self::SEP,
            self.micro_label
        )
    }
}

use std::fmt;

/// Language namespace a slug lives in. Uniqueness is enforced per namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlugLang {
    En,
    Ar,
}

impl SlugLang {
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Storage column holding this namespace's slug.
    pub const fn column(self) -> &'static str {
        match self {
            Self::En => "slug_en",
            Self::Ar => "slug_ar",
        }
    }
}

impl fmt::Display for SlugLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

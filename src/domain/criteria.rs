//! Search criteria enums and their wire values.
//!
//! Both enums are single-select: the search form holds one [`SortMode`] and
//! the filter sidebar holds one [`Condition`].

/// Result ordering requested from the search endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Marketplace default ordering. Sends no `sort` parameter.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    /// Value of the `sort` query parameter, `None` for relevance.
    #[must_use]
    pub const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::Relevance => None,
            Self::PriceAsc => Some("price_asc"),
            Self::PriceDesc => Some("price_desc"),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevância",
            Self::PriceAsc => "Preço: Menor para Maior",
            Self::PriceDesc => "Preço: Maior para Menor",
        }
    }

    /// Next mode in the form's dropdown order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Relevance => Self::PriceAsc,
            Self::PriceAsc => Self::PriceDesc,
            Self::PriceDesc => Self::Relevance,
        }
    }
}

/// Item condition filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Condition {
    #[default]
    All,
    New,
    Used,
}

impl Condition {
    pub const ALL: [Self; 3] = [Self::All, Self::New, Self::Used];

    /// Value of the `ITEM_CONDITION` query parameter, `None` for all.
    #[must_use]
    pub const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::New => Some("new"),
            Self::Used => Some("used"),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Todos",
            Self::New => "Novo",
            Self::Used => "Usado",
        }
    }
}

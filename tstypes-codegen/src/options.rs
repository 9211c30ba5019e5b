//! Output representation selection.

use std::fmt;

/// One of the declaration forms emitted per vocabulary category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// String-literal type union.
    Type,
    /// Enum namespace with ordinal members and key helpers.
    Enum,
    /// `Set` constant of all literals.
    Set,
    /// `Map` constant from literal to ordinal.
    Map,
}

impl Representation {
    /// All representations in emission order.
    pub const ALL: [Self; 4] = [Self::Type, Self::Enum, Self::Set, Self::Map];

    /// Returns the selection name of the representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "Type",
            Self::Enum => "Enum",
            Self::Set => "Set",
            Self::Map => "Map",
        }
    }

    /// Parses a representation from its selection name.
    ///
    /// Matching is exact after trimming surrounding whitespace.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Type" => Some(Self::Type),
            "Enum" => Some(Self::Enum),
            "Set" => Some(Self::Set),
            "Map" => Some(Self::Map),
            _ => None,
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which representations a run emits.
///
/// Every constructor returns a fresh value; there is no shared default to
/// mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Emit the type union.
    pub type_union: bool,
    /// Emit the enum namespace.
    pub enumeration: bool,
    /// Emit the set constant.
    pub set: bool,
    /// Emit the map constant.
    pub map: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            type_union: true,
            enumeration: true,
            set: true,
            map: false,
        }
    }
}

impl Selection {
    /// Creates a selection with every representation disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            type_union: false,
            enumeration: false,
            set: false,
            map: false,
        }
    }

    /// Creates a selection with every representation enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            type_union: true,
            enumeration: true,
            set: true,
            map: true,
        }
    }

    /// Creates a selection enabling only the named representations.
    ///
    /// Unrecognized names are ignored.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .fold(Self::none(), |selection, name| {
                match Representation::parse(name.as_ref()) {
                    Some(repr) => selection.with(repr),
                    None => {
                        tracing::warn!("ignoring unknown representation '{}'", name.as_ref());
                        selection
                    }
                }
            })
    }

    /// Parses a comma-separated list such as `"Type,Set"`.
    #[must_use]
    pub fn parse_list(list: &str) -> Self {
        Self::from_names(list.split(','))
    }

    /// Returns a copy with `repr` enabled.
    #[must_use]
    pub const fn with(mut self, repr: Representation) -> Self {
        match repr {
            Representation::Type => self.type_union = true,
            Representation::Enum => self.enumeration = true,
            Representation::Set => self.set = true,
            Representation::Map => self.map = true,
        }
        self
    }

    /// Returns true if `repr` is enabled.
    #[must_use]
    pub const fn is_enabled(&self, repr: Representation) -> bool {
        match repr {
            Representation::Type => self.type_union,
            Representation::Enum => self.enumeration,
            Representation::Set => self.set,
            Representation::Map => self.map,
        }
    }

    /// Iterates over the enabled representations in emission order.
    pub fn enabled(&self) -> impl Iterator<Item = Representation> + '_ {
        Representation::ALL
            .into_iter()
            .filter(|repr| self.is_enabled(*repr))
    }

    /// Returns true if no representation is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enabled().next().is_none()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, repr) in self.enabled().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(repr.as_str())?;
        }
        Ok(())
    }
}

//! The types assigned to a single Pokemon

use crate::error::CoverageError;
use crate::types::Type;

/// One or two distinct types, in slot order.
///
/// A `TypeSet` can only be built through its validating constructors, so
/// every value that reaches the calculator already holds the 1-2 length
/// and no-duplicates invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Type>", into = "Vec<Type>")
)]
pub struct TypeSet {
    primary: Type,
    secondary: Option<Type>,
}

impl TypeSet {
    /// Mono-typed set
    pub fn single(ty: Type) -> Self {
        Self {
            primary: ty,
            secondary: None,
        }
    }

    /// Dual-typed set, rejecting `Water/Water` and the like
    pub fn dual(primary: Type, secondary: Type) -> Result<Self, CoverageError> {
        if primary == secondary {
            return Err(CoverageError::DuplicateType(secondary));
        }
        Ok(Self {
            primary,
            secondary: Some(secondary),
        })
    }

    /// Build from a slice of 1 or 2 types
    pub fn new(types: &[Type]) -> Result<Self, CoverageError> {
        match types {
            [] => Err(CoverageError::EmptyTypeSet),
            [ty] => Ok(Self::single(*ty)),
            [primary, secondary] => Self::dual(*primary, *secondary),
            _ => Err(CoverageError::TooManyTypes(types.len())),
        }
    }

    /// Parse and validate type names, e.g. `["ghost", "dark"]`
    pub fn from_names<I, S>(names: I) -> Result<Self, CoverageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let types = names
            .into_iter()
            .map(|name| Type::from_name(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&types)
    }

    /// Slot 1 type
    pub fn primary(&self) -> Type {
        self.primary
    }

    /// Slot 2 type, if dual-typed
    pub fn secondary(&self) -> Option<Type> {
        self.secondary
    }

    /// Iterate types in slot order
    pub fn iter(&self) -> impl Iterator<Item = Type> + '_ {
        std::iter::once(self.primary).chain(self.secondary)
    }

    /// Number of types (1 or 2)
    pub fn len(&self) -> usize {
        if self.secondary.is_some() { 2 } else { 1 }
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True when a second type is present
    pub fn is_dual(&self) -> bool {
        self.secondary.is_some()
    }

    /// Check if `ty` is one of the set's types
    pub fn contains(&self, ty: Type) -> bool {
        self.primary == ty || self.secondary == Some(ty)
    }

    /// Same types with slot order swapped (identity for mono-typed sets)
    pub fn reversed(&self) -> Self {
        match self.secondary {
            Some(secondary) => Self {
                primary: secondary,
                secondary: Some(self.primary),
            },
            None => *self,
        }
    }
}

impl From<Type> for TypeSet {
    fn from(ty: Type) -> Self {
        Self::single(ty)
    }
}

impl TryFrom<Vec<Type>> for TypeSet {
    type Error = CoverageError;

    fn try_from(types: Vec<Type>) -> Result<Self, Self::Error> {
        Self::new(&types)
    }
}

impl From<TypeSet> for Vec<Type> {
    fn from(set: TypeSet) -> Self {
        set.iter().collect()
    }
}

impl std::fmt::Display for TypeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_single_and_dual() {
        let water = TypeSet::new(&[Type::Water]).unwrap();
        assert_eq!(water.len(), 1);
        assert!(!water.is_dual());
        assert_eq!(water.primary(), Type::Water);
        assert_eq!(water.secondary(), None);

        let swampert = TypeSet::new(&[Type::Water, Type::Ground]).unwrap();
        assert_eq!(swampert.len(), 2);
        assert_eq!(swampert.iter().collect::<Vec<_>>(), vec![Type::Water, Type::Ground]);
        assert!(swampert.contains(Type::Ground));
        assert!(!swampert.contains(Type::Grass));
    }

    #[test]
    fn test_new_rejects_bad_lengths() {
        assert_eq!(TypeSet::new(&[]), Err(CoverageError::EmptyTypeSet));
        assert_eq!(
            TypeSet::new(&[Type::Fire, Type::Water, Type::Grass]),
            Err(CoverageError::TooManyTypes(3))
        );
    }

    #[test]
    fn test_new_rejects_duplicates() {
        assert_eq!(
            TypeSet::new(&[Type::Fire, Type::Fire]),
            Err(CoverageError::DuplicateType(Type::Fire))
        );
        assert!(TypeSet::dual(Type::Dark, Type::Dark).is_err());
    }

    #[test]
    fn test_from_names() {
        let set = TypeSet::from_names(["ghost", "dark"]).unwrap();
        assert_eq!(set, TypeSet::dual(Type::Ghost, Type::Dark).unwrap());

        let err = TypeSet::from_names(["ghost", "light"]).unwrap_err();
        assert_eq!(err, CoverageError::InvalidType("light".to_string()));

        let empty: [&str; 0] = [];
        assert_eq!(TypeSet::from_names(empty), Err(CoverageError::EmptyTypeSet));
    }

    #[test]
    fn test_invalid_name_reported_before_length() {
        let err = TypeSet::from_names(["fire", "water", "nope"]).unwrap_err();
        assert_eq!(err, CoverageError::InvalidType("nope".to_string()));
    }

    #[test]
    fn test_reversed() {
        let set = TypeSet::dual(Type::Electric, Type::Flying).unwrap();
        let rev = set.reversed();
        assert_eq!(rev.primary(), Type::Flying);
        assert_eq!(rev.secondary(), Some(Type::Electric));
        assert_eq!(TypeSet::single(Type::Ice).reversed(), TypeSet::single(Type::Ice));
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeSet::single(Type::Water).to_string(), "Water");
        assert_eq!(
            TypeSet::dual(Type::Ghost, Type::Dark).unwrap().to_string(),
            "Ghost/Dark"
        );
    }

    #[test]
    fn test_serde_enabled_in_tests() {
        assert!(cfg!(feature = "serde"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates() {
        let set: TypeSet = serde_json::from_str(r#"["water","ground"]"#).unwrap();
        assert_eq!(set, TypeSet::dual(Type::Water, Type::Ground).unwrap());
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["water","ground"]"#);

        assert!(serde_json::from_str::<TypeSet>("[]").is_err());
        assert!(serde_json::from_str::<TypeSet>(r#"["fire","fire"]"#).is_err());
    }
}

//! Accessor resolution and guarded field mutation.
//!
//! Aggregates expose read-only accessors and a single mutation entry point.
//! Callers that only know an accessor identifier (`getNickname`, `avatar`)
//! go through two steps:
//!
//! 1. [`resolve_accessor`] maps the identifier to the logical field it
//!    conventionally reads. This never fails; it is a naming heuristic.
//! 2. [`mutate`] checks the resolved name against the target's declared
//!    fields and writes through the target's closed set of mutable fields.
//!
//! Fields that are declared but not in the mutable set (identity, typically)
//! are rejected with [`DomainError::ImmutableField`]; names with no backing
//! field at all are rejected with [`DomainError::FieldNotFound`]. Either way
//! the target is left untouched.

use crate::error::{DomainError, DomainResult};

/// Logical field name derived from an accessor identifier.
///
/// Lives only for the duration of one update call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Resolve an accessor identifier to the field name it conventionally exposes.
///
/// A leading `get` is stripped and the following character lower-cased
/// (`getNickname` -> `nickname`). Anything else, including a bare `get`, is
/// returned unchanged. `get_avatar` therefore resolves to `_avatar`.
///
/// Nothing here can tell whether the accessor really reads that field;
/// validity is checked by [`mutate`].
pub fn resolve_accessor(accessor: &str) -> FieldDescriptor {
    let Some(rest) = accessor.strip_prefix("get") else {
        return FieldDescriptor::new(accessor);
    };

    let mut chars = rest.chars();
    match chars.next() {
        Some(first) => FieldDescriptor::new(first.to_lowercase().chain(chars).collect::<String>()),
        None => FieldDescriptor::new(accessor),
    }
}

/// Closed set of fields that may be written after construction.
///
/// Implemented by a small fieldless enum per aggregate. Immutable fields are
/// simply not members, so they cannot be named through this type.
pub trait FieldSet: Copy + Eq + core::fmt::Debug + Sized + 'static {
    /// All members, in declaration order.
    const ALL: &'static [Self];

    /// Field name as it is declared on the owning type.
    fn name(self) -> &'static str;

    /// Find the member whose declared name is `name`.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// A type whose post-construction writes all go through a [`FieldSet`].
pub trait GuardedFields {
    /// The mutable subset of this type's fields.
    type Field: FieldSet;

    /// Value written by [`GuardedFields::write_field`].
    type Value;

    /// Every field declared on the type, mutable or not.
    const DECLARED_FIELDS: &'static [&'static str];

    /// Assign `value` to `field` in place. Infallible: `field` is always
    /// a mutable member.
    fn write_field(&mut self, field: Self::Field, value: Self::Value);
}

/// Look up the mutable field a descriptor names on `T`.
pub fn lookup<T: GuardedFields>(descriptor: &FieldDescriptor) -> DomainResult<T::Field> {
    if let Some(field) = T::Field::from_name(descriptor.name()) {
        return Ok(field);
    }

    if T::DECLARED_FIELDS.contains(&descriptor.name()) {
        Err(DomainError::immutable_field(descriptor.name()))
    } else {
        Err(DomainError::field_not_found(descriptor.name()))
    }
}

/// Write `value` into the field `descriptor` names on `target`.
///
/// On success the field holds `value`; on failure `target` is unmodified.
pub fn mutate<T: GuardedFields>(
    target: &mut T,
    descriptor: &FieldDescriptor,
    value: T::Value,
) -> DomainResult<()> {
    let field = lookup::<T>(descriptor).inspect_err(|e| {
        tracing::debug!(field = %descriptor, error = %e, "guarded mutation rejected");
    })?;
    target.write_field(field, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Note {
        id: u32,
        title: String,
        body: String,
    }

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    enum NoteField {
        Title,
        Body,
    }

    impl FieldSet for NoteField {
        const ALL: &'static [Self] = &[NoteField::Title, NoteField::Body];

        fn name(self) -> &'static str {
            match self {
                NoteField::Title => "title",
                NoteField::Body => "body",
            }
        }
    }

    impl GuardedFields for Note {
        type Field = NoteField;
        type Value = String;

        const DECLARED_FIELDS: &'static [&'static str] = &["id", "title", "body"];

        fn write_field(&mut self, field: NoteField, value: String) {
            match field {
                NoteField::Title => self.title = value,
                NoteField::Body => self.body = value,
            }
        }
    }

    fn note() -> Note {
        Note {
            id: 7,
            title: "old".to_string(),
            body: "text".to_string(),
        }
    }

    #[test]
    fn resolves_get_prefixed_accessors() {
        assert_eq!(resolve_accessor("getNickname").name(), "nickname");
        assert_eq!(resolve_accessor("getAvatar").name(), "avatar");
        assert_eq!(resolve_accessor("getId").name(), "id");
    }

    #[test]
    fn snake_case_getter_keeps_underscore() {
        assert_eq!(resolve_accessor("get_avatar").name(), "_avatar");
    }

    #[test]
    fn non_prefixed_accessor_is_used_unchanged() {
        assert_eq!(resolve_accessor("nickname").name(), "nickname");
        assert_eq!(resolve_accessor("Title").name(), "Title");
        assert_eq!(resolve_accessor("").name(), "");
    }

    #[test]
    fn bare_get_is_not_stripped() {
        assert_eq!(resolve_accessor("get").name(), "get");
    }

    #[test]
    fn convention_is_not_structural() {
        // "getter" reads as accessor for a field named "ter".
        assert_eq!(resolve_accessor("getter").name(), "ter");
    }

    #[test]
    fn mutate_writes_mutable_field_only() {
        let mut n = note();
        mutate(&mut n, &resolve_accessor("getTitle"), "new".to_string()).unwrap();

        assert_eq!(n.title, "new");
        assert_eq!(n.body, "text");
        assert_eq!(n.id, 7);
    }

    #[test]
    fn mutate_rejects_declared_immutable_field() {
        let mut n = note();
        let err = mutate(&mut n, &resolve_accessor("getId"), "8".to_string()).unwrap_err();

        assert_eq!(err, DomainError::ImmutableField("id".to_string()));
        assert_eq!(n, note());
    }

    #[test]
    fn mutate_rejects_unknown_field() {
        let mut n = note();
        let err = mutate(&mut n, &resolve_accessor("getAge"), "3".to_string()).unwrap_err();

        assert_eq!(err, DomainError::FieldNotFound("age".to_string()));
        assert_eq!(n, note());
    }

    #[test]
    fn field_set_round_trips_names() {
        for f in NoteField::ALL {
            assert_eq!(NoteField::from_name(f.name()), Some(*f));
        }
        assert_eq!(NoteField::from_name("id"), None);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: `get<X>` always resolves to `<x>` with the first letter lower-cased.
            #[test]
            fn get_prefix_lowercases_first_letter(
                head in "[A-Z]",
                tail in "[A-Za-z0-9]{0,20}"
            ) {
                let accessor = format!("get{head}{tail}");
                let expected = format!("{}{tail}", head.to_lowercase());
                let descriptor = resolve_accessor(&accessor);
                prop_assert_eq!(descriptor.name(), expected.as_str());
            }

            /// Property: identifiers without the prefix pass through unchanged.
            #[test]
            fn unprefixed_identifiers_are_unchanged(ident in "[a-fh-z][A-Za-z0-9]{0,20}") {
                let descriptor = resolve_accessor(&ident);
                prop_assert_eq!(descriptor.name(), ident.as_str());
            }
        }
    }
}

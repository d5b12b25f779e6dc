//! Closed enums with a canonical kebab-case name
//!
//! Status values and field identifiers share the same shape: a fixed set of
//! variants, each with one wire name used for JSON, CLI arguments and
//! categorical filter comparison.

/// Declare a closed enum whose variants map one-to-one onto string names.
///
/// Generates the enum (with serde renames), an `ALL` slice in declaration
/// order, `as_str`, `Display`, and a `FromStr` that rejects unknown names
/// with `Error::InvalidInput`.
///
/// Leading attributes go on the enum, so `#[derive(Default)]` there plus
/// `#[default]` on one variant gives the enum a default.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every variant in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Canonical wire name
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| {
                        $crate::error::Error::InvalidInput(format!("unknown {} '{}'", $label, s))
                    })
            }
        }
    };
}

//! Display/FromStr boilerplate for string-backed enums
//!
//! Feed enums such as [`Channel`](crate::types::Channel) travel as lowercase
//! strings on the wire and in configuration. This macro gives them one
//! canonical string form and case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use shopfeed_domain::impl_string_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Condition {
//!     New,
//!     Used,
//! }
//!
//! impl_string_enum_conversions!(Condition {
//!     New => "new",
//!     Used => "used",
//! });
//!
//! assert_eq!(Condition::New.to_string(), "new");
//! assert_eq!("USED".parse::<Condition>().unwrap(), Condition::Used);
//! ```

/// Implements `Display` and `FromStr` for a fieldless enum.
///
/// Parsing lowercases the input before matching, so the string literals must
/// be lowercase.
#[macro_export]
macro_rules! impl_string_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical string form.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

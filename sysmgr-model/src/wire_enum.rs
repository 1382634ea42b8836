/// Declares a closed string enumeration with an open escape hatch.
///
/// Each variant is paired with its wire value. Values the binding does not
/// know decode into `Unknown(raw)` and encode back unchanged, so a newer
/// service never breaks an older client.
///
/// Equality, hashing and ordering go through the wire value, so a known
/// value built by hand as `Unknown(..)` is the same value as its variant.
///
/// ```
/// sysmgr_model::wire_enum! {
///     /// How a document hash was computed.
///     pub enum DocumentHashType {
///         Sha256 = "Sha256",
///         Sha1 = "Sha1",
///     }
/// }
///
/// let parsed: DocumentHashType = "Sha1".into();
/// assert_eq!(parsed, DocumentHashType::Sha1);
/// assert_eq!(DocumentHashType::from("Md5").as_str(), "Md5");
/// assert_eq!(DocumentHashType::Unknown("Sha1".into()), DocumentHashType::Sha1);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )*
            /// A value not known to this binding, kept verbatim.
            Unknown(::std::string::String),
        }

        impl $name {
            /// Every known wire value, in declared order.
            pub const VALUES: &'static [&'static str] = &[$($value),*];

            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )*
                    Self::Unknown(raw) => raw.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self.as_str(), state)
            }
        }

        impl ::std::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                Some(::std::cmp::Ord::cmp(self, other))
            }
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                ::std::cmp::Ord::cmp(self.as_str(), other.as_str())
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )*
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                match value.as_str() {
                    $( $value => Self::$variant, )*
                    _ => Self::Unknown(value),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok(Self::from(raw))
            }
        }

        impl $crate::HashCode for $name {
            fn hash_code(&self) -> i32 {
                $crate::HashCode::hash_code(self.as_str())
            }
        }

        impl $crate::Render for $name {
            fn render(&self, out: &mut dyn ::std::fmt::Write) -> ::std::fmt::Result {
                out.write_str(self.as_str())
            }
        }

        impl $crate::FieldKind for $name {
            fn field_type() -> $crate::FieldType {
                $crate::FieldType::Enum(::std::stringify!($name))
            }

            fn allowed_values() -> ::std::option::Option<&'static [&'static str]> {
                Some(Self::VALUES)
            }
        }

        impl $crate::FieldValue for $name {
            fn check(
                &self,
                _: &$crate::Constraints,
                path: &str,
                report: &mut ::std::vec::Vec<$crate::Violation>,
            ) {
                $crate::validate::check_allowed(self.as_str(), Some(Self::VALUES), path, report);
            }
        }
    };
}

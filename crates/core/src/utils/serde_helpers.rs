//! Serde helpers for closed selector enums

/// Implement display, case-insensitive parsing and serde for a selector enum
///
/// Usage:
/// ```ignore
/// impl_selector!(
///     Platform, "platform",
///     Arm => "ARM",
///     X86 => "x86"
/// );
/// ```
///
/// The string on the right is the canonical spelling handed to the console
/// runner. Parsing accepts any casing of it.
#[macro_export]
macro_rules! impl_selector {
    ($enum_type:ident, $kind:expr, $($variant:ident => $str_val:expr),+ $(,)?) => {
        impl $enum_type {
            /// Every variant, in declaration order
            pub const ALL: &'static [$enum_type] = &[$($enum_type::$variant),+];

            /// Canonical command-line spelling
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(
                        $enum_type::$variant => $str_val,
                    )+
                }
            }
        }

        impl std::fmt::Display for $enum_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_type {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let wanted = s.trim();
                $(
                    if wanted.eq_ignore_ascii_case($str_val) {
                        return Ok($enum_type::$variant);
                    }
                )+
                Err($crate::error::Error::InvalidSelector {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }

        impl serde::Serialize for $enum_type {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(|_| {
                    serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    ))
                })
            }
        }
    };
}

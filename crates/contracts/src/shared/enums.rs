//! Перечисления с кодом для API, подписью для UI и тоном бейджа.

use serde::{Deserialize, Serialize};

/// Цветовой тон бейджа статуса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
    Informative,
    Subtle,
}

/// Объявляет enum со стабильным кодом (serde), подписью и тоном.
///
/// Первый вариант считается значением по умолчанию.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($code:literal, $label:literal, $tone:ident)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// `(code, label)` pairs for select inputs.
            pub const OPTIONS: &'static [(&'static str, &'static str)] = &[$(($code, $label)),+];

            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn tone(&self) -> $crate::shared::enums::StatusTone {
                match self {
                    $($name::$variant => $crate::shared::enums::StatusTone::$tone,)+
                }
            }

            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

pub(crate) use labeled_enum;

labeled_enum! {
    /// Статус справочных записей (организации, центры, курсы, студенты)
    RecordStatus {
        Active => ("ACTIVE", "Active", Success),
        Inactive => ("INACTIVE", "Inactive", Subtle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_status_codes() {
        assert_eq!(RecordStatus::default(), RecordStatus::Active);
        assert_eq!(RecordStatus::from_code("INACTIVE"), Some(RecordStatus::Inactive));
        assert_eq!(RecordStatus::from_code("inactive"), None);
        assert_eq!(
            serde_json::to_string(&RecordStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!(RecordStatus::OPTIONS[1], ("INACTIVE", "Inactive"));
    }
}

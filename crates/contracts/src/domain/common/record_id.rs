use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Трейт для типов идентификаторов записей
///
/// The backend issues opaque string ids; the wrapper types only keep ids of
/// different entities from being mixed up.
pub trait RecordId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + Debug + Display + Send + Sync
{
    fn as_str(&self) -> &str;

    fn from_string(s: &str) -> Result<Self, String>;
}

/// Объявляет newtype-идентификатор записи.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }
        }

        impl $crate::domain::common::RecordId for $name {
            fn as_str(&self) -> &str {
                &self.0
            }

            fn from_string(s: &str) -> Result<Self, String> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Err(format!("Empty {}", stringify!($name)))
                } else {
                    Ok(Self(trimmed.to_string()))
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub(crate) use record_id;

#![allow(clippy::missing_inline_in_public_items)]

use alloc::string::String;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Dims;

/// Serialized as its label, like [`Enum::marshal_text()`](crate::Enum::marshal_text).
impl Serialize for Dims {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Accepts the same text as [`Enum::set_string()`](crate::Enum::set_string).
impl<'de> Deserialize<'de> for Dims {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn dims_as_json() {
        assert_eq!(serde_json::to_string(&Dims::ALL).unwrap(), r#"["X","Y","Z","W"]"#);
        assert_eq!(
            serde_json::from_str::<Vec<Dims>>(r#"["W","z","Y","x"]"#).unwrap(),
            [Dims::W, Dims::Z, Dims::Y, Dims::X]
        );
    }

    #[test]
    fn invalid_dims_serialize_but_do_not_deserialize() {
        let json = serde_json::to_string(&Dims::from(99)).unwrap();
        assert_eq!(json, r#""99""#);

        let error = serde_json::from_str::<Dims>(&json).unwrap_err();
        assert!(
            error
                .to_string()
                .starts_with("99 is not a valid value for type Dims"),
            "{error}"
        );
    }

    #[test]
    fn dims_from_json_number_is_rejected() {
        assert!(serde_json::from_str::<Dims>("1").is_err());
    }
}

//! Deserialize a big integer from its decimal string form.

use core::fmt;

use serde::de::{Deserialize, Deserializer, Error, Visitor};

use crate::bigint::Bigint;

impl<'de> Deserialize<'de> for Bigint {
    fn deserialize<D>(deserializer: D) -> Result<Bigint, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigintVisitor;

        impl<'de> Visitor<'de> for BigintVisitor {
            type Value = Bigint;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string")
            }

            fn visit_str<E>(self, text: &str) -> Result<Bigint, E>
            where
                E: Error,
            {
                text.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BigintVisitor)
    }
}

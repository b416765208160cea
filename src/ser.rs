//! Serialize a big integer as its decimal string form.

use serde::ser::{Serialize, Serializer};

use crate::bigint::Bigint;

impl Serialize for Bigint {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

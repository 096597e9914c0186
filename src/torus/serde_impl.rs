//! Serde support for tori (feature-gated)
//!
//! A torus serializes as `{ "dims": [...], "data": [...] }` with `data` in
//! row-major order. Deserialization re-runs construction, so a payload with a
//! zero axis, the wrong rank, or the wrong element count is rejected.
//!
//! # Example
//!
//! ```rust,ignore
//! use flagwater::torus::Torus;
//!
//! let grid = Torus::from_vec([2, 2], vec![1u8, 2, 3, 4]).unwrap();
//! let json = serde_json::to_string(&grid).unwrap();
//! assert_eq!(json, r#"{"dims":[2,2],"data":[1,2,3,4]}"#);
//!
//! let bad = r#"{"dims":[2,2],"data":[1,2,3]}"#;
//! assert!(serde_json::from_str::<Torus<u8, 2>>(bad).is_err());
//! ```

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Torus, TorusError};

impl<T: Serialize, const N: usize> Serialize for Torus<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Torus", 2)?;
        state.serialize_field("dims", &self.dims[..])?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "Torus")]
struct RawTorus<T> {
    dims: Vec<usize>,
    data: Vec<T>,
}

impl<'de, T, const N: usize> Deserialize<'de> for Torus<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawTorus::<T>::deserialize(deserializer)?;
        let rank = raw.dims.len();
        let dims: [usize; N] = raw.dims.try_into().map_err(|_| {
            <D::Error as serde::de::Error>::custom(TorusError::RankMismatch {
                expected: N,
                actual: rank,
            })
        })?;
        Torus::from_vec(dims, raw.data).map_err(serde::de::Error::custom)
    }
}

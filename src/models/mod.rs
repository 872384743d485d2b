pub mod address;
pub mod dashboard;
pub mod location;
pub mod packet;
pub mod response;
pub mod role;

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

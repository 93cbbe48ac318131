use crate::Option;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::option::Option as Nilable;

// None is written as `null`, Some(a) as `a` itself. A payload that itself
// encodes as `null` (`()`, a nested None) therefore reads back as None.
impl<T> Serialize for Option<T>
where
  T: Serialize,
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      Option::Some(a) => serializer.serialize_some(a),
      Option::None => serializer.serialize_none(),
    }
  }
}

impl<'de, T> Deserialize<'de> for Option<T>
where
  T: Deserialize<'de>,
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    Nilable::<T>::deserialize(deserializer).map(Option::from_nilable)
  }
}

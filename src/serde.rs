use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error as _;
use serde::de::Visitor;

use crate::Month;
use crate::Weekday;
use crate::YearMonth;

impl Serialize for YearMonth {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

struct YearMonthVisitor;

impl Visitor<'_> for YearMonthVisitor {
  type Value = YearMonth;

  #[cfg(not(tarpaulin_include))]
  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a YYYY-MM year and month string")
  }

  fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
    s.parse().map_err(E::custom)
  }
}

impl<'de> Deserialize<'de> for YearMonth {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_str(YearMonthVisitor)
  }
}

impl Serialize for Month {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(self.number())
  }
}

impl<'de> Deserialize<'de> for Month {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let number = u8::deserialize(deserializer)?;
    Month::try_from(number).map_err(D::Error::custom)
  }
}

impl Serialize for Weekday {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

struct WeekdayVisitor;

impl Visitor<'_> for WeekdayVisitor {
  type Value = Weekday;

  #[cfg(not(tarpaulin_include))]
  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("an English weekday name")
  }

  fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
    (1..=7)
      .filter_map(Weekday::from_ordinal)
      .find(|weekday| weekday.to_string().eq_ignore_ascii_case(s))
      .ok_or_else(|| E::custom(format!("unknown weekday: {}", s)))
  }
}

impl<'de> Deserialize<'de> for Weekday {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_str(WeekdayVisitor)
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_serde() -> Result<(), serde_json::Error> {
    let json = r#"{"month":"2019-09","number":9,"weekday":"Sunday"}"#;
    let struct_: TestStruct = serde_json::from_str(json)?;
    check!(struct_.month == YearMonth::new(2019, 9).unwrap());
    check!(struct_.number == Month::September);
    check!(struct_.weekday == Weekday::Sunday);
    let json = serde_json::to_string(&struct_)?;
    check!(json == r#"{"month":"2019-09","number":9,"weekday":"Sunday"}"#);
    Ok(())
  }

  #[test]
  fn test_serde_errors() {
    check!(serde_json::from_str::<YearMonth>(r#""2019-13""#).is_err());
    check!(serde_json::from_str::<Month>("0").is_err());
    check!(serde_json::from_str::<Weekday>(r#""Caturday""#).is_err());
    check!(serde_json::from_str::<Weekday>(r#""monday""#).ok() == Some(Weekday::Monday));
  }

  #[derive(Deserialize, Serialize)]
  struct TestStruct {
    month: YearMonth,
    number: Month,
    weekday: Weekday,
  }
}

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        format!("{}", time.format(DATE_FMT)).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use crate::utils::date::DATE_FMT;

    #[tokio::test]
    async fn test_should_round_trip_date_format() {
        // e.g. 2022-09-24T04:40:35.726029
        let date = NaiveDateTime::parse_from_str("2022-09-24T04:40:35.726029", DATE_FMT)
            .expect("should parse date");
        let formatted = format!("{}", date.format(DATE_FMT));
        assert_eq!("2022-09-24T04:40:35.726029", formatted.as_str());
    }
}

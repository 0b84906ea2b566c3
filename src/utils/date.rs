use chrono::{NaiveDateTime, Utc};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

pub mod serializer {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    // accepts our own format as well as RFC 3339 with an offset
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&str_time, DATE_FMT)
            .or_else(|_| DateTime::parse_from_rfc3339(&str_time).map(|t| t.naive_utc()))
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::serializer;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1).and_then(|d| d.and_hms_milli_opt(10, 30, 5, 250)).expect("valid date")
    }

    #[test]
    fn test_should_write_and_read_back_timestamp() {
        let json = serde_json::to_string(&Stamp { at: sample() }).expect("should serialize");
        assert_eq!(r#"{"at":"2024-03-01T10:30:05.250"}"#, json);
        let stamp: Stamp = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(sample(), stamp.at);
    }

    #[test]
    fn test_should_accept_rfc3339_timestamp() {
        let stamp: Stamp = serde_json::from_str(r#"{"at":"2024-03-01T12:30:05.250+02:00"}"#).expect("should deserialize");
        assert_eq!(sample(), stamp.at);
    }

    #[test]
    fn test_should_reject_garbage_timestamp() {
        assert!(serde_json::from_str::<Stamp>(r#"{"at":"yesterday"}"#).is_err());
    }
}

// Module name shadows the `serde` crate; use `::serde` for the external crate.
use ::serde::Serializer;
use chrono::{DateTime, SecondsFormat, Utc};

/// Serialize `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// [`to_rfc3339_ms`] for optional timestamps; `None` serializes as `null`.
pub fn to_rfc3339_ms_opt<S>(dt: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => to_rfc3339_ms(dt, s),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(::serde::Serialize)]
    struct Stamped {
        #[serde(serialize_with = "to_rfc3339_ms")]
        at: DateTime<Utc>,
        #[serde(serialize_with = "to_rfc3339_ms_opt")]
        released: Option<DateTime<Utc>>,
    }

    #[test]
    fn should_format_datetime_as_rfc3339_with_millis() {
        let at = Utc.with_ymd_and_hms(2023, 2, 11, 11, 9, 0).unwrap();
        let json = serde_json::to_value(Stamped { at, released: None }).unwrap();
        assert_eq!(json["at"], "2023-02-11T11:09:00.000Z");
        assert!(json["released"].is_null());
    }

    #[test]
    fn should_format_present_optional_datetime() {
        let at = Utc.with_ymd_and_hms(2016, 6, 29, 0, 0, 0).unwrap();
        let json = serde_json::to_value(Stamped {
            at,
            released: Some(at),
        })
        .unwrap();
        assert_eq!(json["released"], "2016-06-29T00:00:00.000Z");
    }
}

use serde::{Deserialize, Deserializer};

/// Success body of the token endpoint. The service reports `expires_in` as a
/// decimal string ("300") while sandbox deployments send a bare number, so
/// the field accepts either.
#[derive(Deserialize)]
pub(crate) struct TokenWire {
    pub(crate) access_token: String,
    pub(crate) refresh_token: String,
    #[serde(deserialize_with = "de_u64_from_string_or_number")]
    pub(crate) expires_in: u64,
}

fn de_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        U64(u64),
        Str(String),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::U64(u) => Ok(u),
        StringOrNumber::Str(s) => s.trim().parse::<u64>().map_err(|_| {
            serde::de::Error::custom(format!("cannot parse expires_in from {s:?}"))
        }),
    }
}

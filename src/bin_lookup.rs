use std::time::Duration;

use reqwest::{Client, ClientBuilder};

const DEFAULT_BASE_URL: &str = "https://bins.antipublic.cc/api";

pub struct BinLookup {
    reqwest: Client,
    base_url: String,
}

/// Raw shape of the lookup service response. Every field is optional,
/// the service omits keys it has no data for.
#[derive(Deserialize, Debug)]
struct BinResponse {
    vendor: Option<String>,
    #[serde(rename = "type")]
    card_type: Option<String>,
    level: Option<String>,
    bank: Option<String>,
    country_name: Option<String>,
    country_emoji: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinInfo {
    pub vendor: String,
    pub card_type: String,
    pub level: String,
    pub bank: String,
    pub country_name: String,
    pub country_emoji: String,
}

impl BinInfo {
    /// Fixed record substituted whenever the lookup fails.
    pub fn unknown() -> Self {
        Self {
            vendor: "Unknown".into(),
            card_type: "Unknown".into(),
            level: "Unknown".into(),
            bank: "Unknown".into(),
            country_name: "Unknown".into(),
            country_emoji: "🌍".into(),
        }
    }
}

impl From<BinResponse> for BinInfo {
    fn from(raw: BinResponse) -> Self {
        let or_unknown =
            |field: Option<String>| field.filter(|v| !v.is_empty()).unwrap_or_else(|| "Unknown".into());

        Self {
            vendor: or_unknown(raw.vendor.map(|v| v.to_uppercase())),
            card_type: or_unknown(raw.card_type.map(|v| v.to_uppercase())),
            level: or_unknown(raw.level),
            bank: or_unknown(raw.bank),
            country_name: or_unknown(raw.country_name),
            country_emoji: raw
                .country_emoji
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "🌍".into()),
        }
    }
}

impl BinLookup {
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = dotenv::var("BIN_LOOKUP_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        Ok(Self {
            reqwest: ClientBuilder::new()
                .timeout(Duration::from_secs(5))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Resolves BIN metadata from the lookup service. Callers decide how to
    /// degrade on failure, usually with [`BinInfo::unknown`].
    #[tracing::instrument(skip(self))]
    pub async fn lookup(&self, bin: &str) -> anyhow::Result<BinInfo> {
        let url = format!("{}/{}", self.base_url, bin);

        let res = self.reqwest.get(&url).send().await?;

        if !res.status().is_success() {
            anyhow::bail!("BIN lookup responded with status {}", res.status());
        }

        let body = res.text().await?;
        let raw: BinResponse = serde_json::from_str(&body)?;

        Ok(raw.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_record_is_fixed() {
        let info = BinInfo::unknown();

        assert_eq!(info, BinInfo::unknown());
        assert_eq!(info.vendor, "Unknown");
        assert_eq!(info.card_type, "Unknown");
        assert_eq!(info.level, "Unknown");
        assert_eq!(info.bank, "Unknown");
        assert_eq!(info.country_name, "Unknown");
        assert_eq!(info.country_emoji, "🌍");
    }

    #[test]
    fn maps_and_uppercases_response_fields() {
        let raw: BinResponse = serde_json::from_str(
            r#"{
                "vendor": "visa",
                "type": "debit",
                "level": "classic",
                "bank": "Chase",
                "country_name": "United States",
                "country_emoji": "🇺🇸"
            }"#,
        )
        .expect("Should deserialize");

        let info = BinInfo::from(raw);

        assert_eq!(info.vendor, "VISA");
        assert_eq!(info.card_type, "DEBIT");
        assert_eq!(info.level, "classic");
        assert_eq!(info.bank, "Chase");
        assert_eq!(info.country_name, "United States");
        assert_eq!(info.country_emoji, "🇺🇸");
    }

    #[test]
    fn missing_keys_map_to_unknown() {
        let raw: BinResponse =
            serde_json::from_str(r#"{"vendor": "AMEX"}"#).expect("Should deserialize");

        let info = BinInfo::from(raw);

        assert_eq!(info.vendor, "AMEX");
        assert_eq!(info.card_type, "Unknown");
        assert_eq!(info.bank, "Unknown");
        assert_eq!(info.country_emoji, "🌍");
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let raw: BinResponse = serde_json::from_str(r#"{"vendor": "", "bank": ""}"#)
            .expect("Should deserialize");

        let info = BinInfo::from(raw);

        assert_eq!(info.vendor, "Unknown");
        assert_eq!(info.bank, "Unknown");
    }
}

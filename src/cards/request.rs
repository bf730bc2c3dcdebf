use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

pub const QTY_MIN: u32 = 10;
pub const QTY_MAX: u32 = 100;

/// Silent fallback for a quantity token that makes no sense.
const QTY_DEFAULT: u32 = 10;

lazy_static! {
    static ref GEN_RE: Regex = Regex::new(
        r"(?i)^\s*/?gen\s+(\d{6,8})[|/](\d{1,2}|skip|random)[|/](\d{4}|skip|random)[|/](\d{3,4}|skip|random)\s+(\S+)\s*$"
    )
    .expect("Should be compilable");
}

/// A month/year/CVV slot of the request: either taken verbatim from the
/// message or drawn fresh for every card in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    Literal(String),
    Random,
}

impl FieldSpec {
    fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("skip") || token.eq_ignore_ascii_case("random") {
            Self::Random
        } else {
            Self::Literal(token.to_owned())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenRequest {
    pub bin: String,
    pub month: FieldSpec,
    pub year: FieldSpec,
    pub cvv: FieldSpec,
    pub qty: u32,
}

impl GenRequest {
    /// Parses a `/gen BIN|MM|YYYY|CVV QTY` line. Separators can be `|` or
    /// `/`, keywords are case-insensitive. A range quantity is resolved to
    /// a single draw here, so the whole batch shares one size.
    pub fn parse(text: &str, rng: &mut impl Rng) -> Option<Self> {
        let caps = GEN_RE.captures(text)?;

        let qty = resolve_qty(&caps[5], rng).clamp(QTY_MIN, QTY_MAX);

        Some(Self {
            bin: caps[1].to_owned(),
            month: FieldSpec::parse(&caps[2]),
            year: FieldSpec::parse(&caps[3]),
            cvv: FieldSpec::parse(&caps[4]),
            qty,
        })
    }
}

fn resolve_qty(token: &str, rng: &mut impl Rng) -> u32 {
    if let Ok(qty) = token.parse::<u32>() {
        return qty;
    }

    let Some((low, high)) = token.split_once('-') else {
        return QTY_DEFAULT;
    };

    match (low.parse::<u32>(), high.parse::<u32>()) {
        (Ok(low), Ok(high)) if low <= high => rng.random_range(low..=high),
        _ => QTY_DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn parses_full_literal_request() {
        let request =
            GenRequest::parse("/gen 414720|01|2025|450 10", &mut rng()).expect("Should parse");

        assert_eq!(request.bin, "414720");
        assert_eq!(request.month, FieldSpec::Literal("01".into()));
        assert_eq!(request.year, FieldSpec::Literal("2025".into()));
        assert_eq!(request.cvv, FieldSpec::Literal("450".into()));
        assert_eq!(request.qty, 10);
    }

    #[test]
    fn accepts_slash_separators_and_missing_command_slash() {
        let request =
            GenRequest::parse("gen 53749800/05/2027/999 25", &mut rng()).expect("Should parse");

        assert_eq!(request.bin, "53749800");
        assert_eq!(request.qty, 25);
    }

    #[test]
    fn sentinels_are_case_insensitive() {
        let request =
            GenRequest::parse("/GEN 414720|SKIP|Random|skip 15", &mut rng()).expect("Should parse");

        assert_eq!(request.month, FieldSpec::Random);
        assert_eq!(request.year, FieldSpec::Random);
        assert_eq!(request.cvv, FieldSpec::Random);
    }

    #[test]
    fn quantity_is_clamped_into_bounds() {
        let low = GenRequest::parse("/gen 414720|01|2025|450 3", &mut rng()).expect("Should parse");
        assert_eq!(low.qty, QTY_MIN);

        let high =
            GenRequest::parse("/gen 414720|01|2025|450 5000", &mut rng()).expect("Should parse");
        assert_eq!(high.qty, QTY_MAX);
    }

    #[test]
    fn range_quantity_resolves_within_bounds() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let request =
                GenRequest::parse("/gen 414720|01|2025|450 20-30", &mut rng).expect("Should parse");

            assert!((20..=30).contains(&request.qty));
        }
    }

    #[test]
    fn invalid_quantity_text_defaults_to_ten() {
        let garbage =
            GenRequest::parse("/gen 414720|01|2025|450 lots", &mut rng()).expect("Should parse");
        assert_eq!(garbage.qty, QTY_DEFAULT);

        let reversed =
            GenRequest::parse("/gen 414720|01|2025|450 30-20", &mut rng()).expect("Should parse");
        assert_eq!(reversed.qty, QTY_DEFAULT);

        let half_range =
            GenRequest::parse("/gen 414720|01|2025|450 20-", &mut rng()).expect("Should parse");
        assert_eq!(half_range.qty, QTY_DEFAULT);
    }

    #[test]
    fn rejects_malformed_lines() {
        // BIN with letters and too few fields
        assert_eq!(GenRequest::parse("amex401234|skip|skip|skip 5", &mut rng()), None);
        // Missing CVV field
        assert_eq!(GenRequest::parse("/gen 414720|01|2025 10", &mut rng()), None);
        // BIN too short
        assert_eq!(GenRequest::parse("/gen 41472|01|2025|450 10", &mut rng()), None);
        // No quantity
        assert_eq!(GenRequest::parse("/gen 414720|01|2025|450", &mut rng()), None);
        assert_eq!(GenRequest::parse("hello there", &mut rng()), None);
    }
}

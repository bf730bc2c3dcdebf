use std::fmt::{Display, Formatter};

use chrono::Datelike;
use rand::Rng;
use strum_macros::{AsRefStr, EnumString};

use super::luhn;
use super::request::{FieldSpec, GenRequest};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Vendor {
    #[strum(serialize = "AMEX", serialize = "AMERICAN EXPRESS")]
    Amex,
    #[strum(serialize = "VISA")]
    Visa,
    #[strum(serialize = "MASTERCARD")]
    Mastercard,
    #[strum(serialize = "DISCOVER")]
    Discover,
    Unknown,
}

impl Vendor {
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Self::Unknown)
    }

    pub fn card_length(self) -> usize {
        match self {
            Self::Amex => 15,
            _ => 16,
        }
    }

    pub fn cvv_length(self) -> u32 {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }
}

pub struct GeneratedCard {
    pub number: String,
    pub month: String,
    pub year: String,
    pub cvv: String,
}

impl Display for GeneratedCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}|{}|{}", self.number, self.month, self.year, self.cvv)
    }
}

pub fn generate_batch(
    request: &GenRequest,
    vendor: Vendor,
    rng: &mut impl Rng,
) -> Vec<GeneratedCard> {
    (0..request.qty)
        .map(|_| GeneratedCard {
            number: generate_number(&request.bin, vendor, rng),
            month: resolve_month(&request.month, rng),
            year: resolve_year(&request.year, rng),
            cvv: resolve_cvv(&request.cvv, vendor, rng),
        })
        .collect()
}

/// Random digits after the BIN prefix, closed with the Luhn checksum digit.
pub fn generate_number(bin: &str, vendor: Vendor, rng: &mut impl Rng) -> String {
    let mut number = String::with_capacity(vendor.card_length());
    number.push_str(bin);

    while number.len() < vendor.card_length() - 1 {
        number.push(char::from(b'0' + rng.random_range(0..10u8)));
    }

    number.push(char::from(b'0' + luhn::check_digit(&number)));

    number
}

fn resolve_month(spec: &FieldSpec, rng: &mut impl Rng) -> String {
    match spec {
        FieldSpec::Literal(value) => value.clone(),
        FieldSpec::Random => format!("{:02}", rng.random_range(1..=12u32)),
    }
}

fn resolve_year(spec: &FieldSpec, rng: &mut impl Rng) -> String {
    match spec {
        FieldSpec::Literal(value) => value.clone(),
        FieldSpec::Random => {
            let current = chrono::Utc::now().year();

            rng.random_range(current + 1..=current + 5).to_string()
        },
    }
}

fn resolve_cvv(spec: &FieldSpec, vendor: Vendor, rng: &mut impl Rng) -> String {
    match spec {
        FieldSpec::Literal(value) => value.clone(),
        FieldSpec::Random => {
            let len = vendor.cvv_length() as usize;

            format!("{:0len$}", rng.random_range(0..10u32.pow(vendor.cvv_length())))
        },
    }
}

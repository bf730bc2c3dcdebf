/// Checksum digit completing `payload` into a Luhn-valid number.
/// `payload` must contain ASCII digits only.
pub fn check_digit(payload: &str) -> u8 {
    let sum: u32 = payload
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let mut digit = u32::from(b - b'0');

            // The payload misses its final digit, so the doubling
            // starts right at its last position
            if i % 2 == 0 {
                digit *= 2;

                if digit > 9 {
                    digit -= 9;
                }
            }

            digit
        })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

pub fn is_valid(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = number
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let mut digit = u32::from(b - b'0');

            if i % 2 == 1 {
                digit *= 2;

                if digit > 9 {
                    digit -= 9;
                }
            }

            digit
        })
        .sum();

    sum % 10 == 0
}

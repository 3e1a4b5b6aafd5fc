// Booking receipt: the only artifact a booking persists
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::catalog::RoomType;
use crate::CURRENCY_PREFIX;

pub const RECEIPT_FILE_SUFFIX: &str = "_booking_receipt.txt";

/// Formats a money amount with exactly two decimals.
///
/// The amount is taken at its shortest decimal form and rounded half up, so
/// `1.005` prints as `1.01` rather than following the binary value down.
pub fn format_amount(amount: f64) -> String {
    match Decimal::from_str(&amount.to_string()) {
        Ok(value) => format!(
            "{:.2}",
            value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        // Beyond Decimal's range
        Err(_) => format!("{:.2}", amount),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_type: RoomType,
    pub nights: u32,
    pub check_in_date: NaiveDate,
    pub check_in_time: NaiveTime,
    pub rooms: u32,
    pub price_per_night: f64,
    pub grand_total: f64,
}

impl Receipt {
    /// Receipt file name for this guest, relative to the output directory.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.name, RECEIPT_FILE_SUFFIX)
    }

    // 12-hour clock, zero-padded, with AM/PM suffix
    pub fn formatted_check_in_time(&self) -> String {
        self.check_in_time.format("%I:%M %p").to_string()
    }

    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer Information:")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Email: {}", self.email)?;
        writeln!(f, "Phone Number: {}", self.phone)?;
        writeln!(f)?;
        writeln!(f, "Booking Details:")?;
        writeln!(f, "Room Type: {}", self.room_type.label())?;
        writeln!(f, "Number of Nights: {}", self.nights)?;
        writeln!(f, "Check-in Date: {}", self.check_in_date.format("%Y-%m-%d"))?;
        writeln!(f, "Check-in Time: {}", self.formatted_check_in_time())?;
        writeln!(f, "Number of Rooms: {}", self.rooms)?;
        writeln!(f)?;
        writeln!(f, "Payment Details:")?;
        writeln!(
            f,
            "Price per Night: {}{}",
            CURRENCY_PREFIX,
            format_amount(self.price_per_night)
        )?;
        write!(
            f,
            "Total Fee: {}{}",
            CURRENCY_PREFIX,
            format_amount(self.grand_total)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sample_receipt() -> Receipt {
        Receipt {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            phone: "123".to_string(),
            room_type: RoomType::Standard,
            nights: 3,
            check_in_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            check_in_time: NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
            rooms: 2,
            price_per_night: 100.0,
            grand_total: 600.0,
        }
    }

    #[test]
    fn test_receipt_text_is_exact() {
        let expected = "Customer Information:\n\
                        Name: Alice\n\
                        Email: a@x.com\n\
                        Phone Number: 123\n\
                        \n\
                        Booking Details:\n\
                        Room Type: Standard Room\n\
                        Number of Nights: 3\n\
                        Check-in Date: 2024-01-10\n\
                        Check-in Time: 09:15 AM\n\
                        Number of Rooms: 2\n\
                        \n\
                        Payment Details:\n\
                        Price per Night: RM100.00\n\
                        Total Fee: RM600.00";

        assert_eq!(sample_receipt().text(), expected);
    }

    #[test_case(0, 0, "12:00 AM"; "#1 Midnight")]
    #[test_case(9, 5, "09:05 AM"; "#2 Leading zeros")]
    #[test_case(12, 0, "12:00 PM"; "#3 Noon")]
    #[test_case(13, 45, "01:45 PM"; "#4 Afternoon")]
    #[test_case(23, 30, "11:30 PM"; "#5 Late evening")]
    fn test_check_in_time_format(hour: u32, minute: u32, expected: &str) {
        let receipt = Receipt {
            check_in_time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
            ..sample_receipt()
        };
        assert_eq!(receipt.formatted_check_in_time(), expected);
        assert!(receipt
            .text()
            .contains(&format!("Check-in Time: {}", expected)));
    }

    #[test_case(99.999, "RM100.00"; "#1 Rounds up at the last step")]
    #[test_case(0.0, "RM0.00"; "#2 Zero")]
    #[test_case(1234.5, "RM1234.50"; "#3 Pads to two digits")]
    #[test_case(0.125, "RM0.13"; "#4 Tie rounds half up")]
    #[test_case(1.005, "RM1.01"; "#5 Tie below the binary value rounds up")]
    #[test_case(2.675, "RM2.68"; "#6 Another binary-low tie")]
    fn test_amounts_use_two_decimals(amount: f64, expected: &str) {
        let receipt = Receipt {
            grand_total: amount,
            ..sample_receipt()
        };
        assert!(receipt
            .text()
            .ends_with(&format!("Total Fee: {}", expected)));
    }

    #[test]
    fn test_price_per_night_rounds_half_up() {
        let receipt = Receipt {
            price_per_night: 0.125,
            grand_total: 1.005,
            ..sample_receipt()
        };
        let text = receipt.text();
        assert!(text.contains("Price per Night: RM0.13\n"));
        assert!(text.ends_with("Total Fee: RM1.01"));
    }

    #[test_case(f64::MAX; "#1 Beyond decimal range")]
    #[test_case(1e30; "#2 Large amount")]
    fn test_format_amount_large_values(amount: f64) {
        let formatted = format_amount(amount);
        assert!(formatted.ends_with(".00"), "got {}", formatted);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(sample_receipt().file_name(), "Alice_booking_receipt.txt");
    }

    #[test]
    fn test_single_digit_month_and_day_are_padded() {
        let receipt = Receipt {
            check_in_date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            ..sample_receipt()
        };
        assert!(receipt.text().contains("Check-in Date: 2025-03-07\n"));
    }
}

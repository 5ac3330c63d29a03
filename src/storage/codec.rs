//! Line codec for the pipe-delimited ledger file
//!
//! Each record is one line: `date|time|description|vendor|category|amount|balance`.
//! Older files wrote fewer columns, so decoding picks a schema by field count.
//! Encoding always writes the current seven-column schema.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, UNCATEGORIZED};

/// Field delimiter
pub const DELIMITER: char = '|';

/// A historically valid record layout
pub struct RecordSchema {
    pub name: &'static str,
    pub field_count: usize,
    decode: fn(&[&str], &str) -> LedgerResult<Transaction>,
}

/// Known schemas, oldest first
pub const SCHEMAS: &[RecordSchema] = &[
    RecordSchema {
        name: "legacy",
        field_count: 5,
        decode: decode_legacy,
    },
    RecordSchema {
        name: "categorized",
        field_count: 6,
        decode: decode_categorized,
    },
    RecordSchema {
        name: "current",
        field_count: 7,
        decode: decode_current,
    },
];

/// Find the schema that matches a field count
pub fn schema_for(field_count: usize) -> Option<&'static RecordSchema> {
    SCHEMAS.iter().find(|s| s.field_count == field_count)
}

/// Decode one stored line into a transaction
pub fn decode_line(line: &str) -> LedgerResult<Transaction> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split(DELIMITER).collect();

    let schema = schema_for(fields.len()).ok_or_else(|| {
        LedgerError::malformed(
            format!("expected 5, 6 or 7 fields, found {}", fields.len()),
            line,
        )
    })?;

    (schema.decode)(&fields, line)
}

/// Encode a transaction in the current seven-field schema
pub fn encode_line(txn: &Transaction) -> String {
    format!(
        "{date}{d}{time}{d}{description}{d}{vendor}{d}{category}{d}{amount}{d}{balance}",
        d = DELIMITER,
        date = txn.date(),
        time = txn.time(),
        description = txn.description(),
        vendor = txn.vendor(),
        category = txn.category(),
        amount = txn.amount(),
        balance = txn.balance(),
    )
}

fn decode_legacy(f: &[&str], line: &str) -> LedgerResult<Transaction> {
    let amount = parse_money("amount", f[4], line)?;
    Ok(Transaction::with_category(
        f[0],
        f[1],
        f[2],
        f[3],
        UNCATEGORIZED,
        amount,
    ))
}

fn decode_categorized(f: &[&str], line: &str) -> LedgerResult<Transaction> {
    let amount = parse_money("amount", f[5], line)?;
    Ok(Transaction::with_category(
        f[0], f[1], f[2], f[3], f[4], amount,
    ))
}

fn decode_current(f: &[&str], line: &str) -> LedgerResult<Transaction> {
    let amount = parse_money("amount", f[5], line)?;
    let balance = parse_money("balance", f[6], line)?;
    Ok(Transaction::with_balance(
        f[0], f[1], f[2], f[3], f[4], amount, balance,
    ))
}

fn parse_money(field: &str, text: &str, line: &str) -> LedgerResult<Money> {
    Money::parse(text)
        .map_err(|_| LedgerError::malformed(format!("invalid {} '{}'", field, text), line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::with_balance(
            "2024-01-02",
            "10:00:00",
            "Rent",
            "Landlord",
            "Housing",
            Money::from_cents(-20000),
            Money::from_cents(80000),
        )
    }

    #[test]
    fn test_encode_current_schema() {
        assert_eq!(
            encode_line(&sample()),
            "2024-01-02|10:00:00|Rent|Landlord|Housing|-200.00|800.00"
        );
    }

    #[test]
    fn test_round_trip() {
        let txn = sample();
        let decoded = decode_line(&encode_line(&txn)).unwrap();
        assert_eq!(decoded, txn);
    }

    #[test]
    fn test_decode_legacy_five_fields() {
        let txn = decode_line("2023-04-15|10:13:25|ergonomic keyboard|Amazon|-89.50").unwrap();
        assert_eq!(txn.vendor(), "Amazon");
        assert_eq!(txn.category(), UNCATEGORIZED);
        assert_eq!(txn.amount(), Money::from_cents(-8950));
        assert_eq!(txn.balance(), Money::zero());
    }

    #[test]
    fn test_decode_six_fields() {
        let txn = decode_line("2023-04-15|11:15:00|Invoice 1001 paid|Joe|Income|1500").unwrap();
        assert_eq!(txn.category(), "Income");
        assert_eq!(txn.amount(), Money::from_cents(150000));
        assert_eq!(txn.balance(), Money::zero());
    }

    #[test]
    fn test_decode_strips_carriage_return() {
        let txn = decode_line("2024-01-01|09:00:00|Paycheck|Employer|Income|1000.00|1000.00\r")
            .unwrap();
        assert_eq!(txn.balance(), Money::from_cents(100000));
    }

    #[test]
    fn test_decode_keeps_empty_fields() {
        let txn = decode_line("2024-01-01|09:00:00||Employer|5").unwrap();
        assert_eq!(txn.description(), "");
    }

    #[test]
    fn test_decode_rejects_wrong_field_count() {
        assert!(decode_line("a|b|c").unwrap_err().is_malformed());
        assert!(decode_line("1|2|3|4|5|6|7|8").unwrap_err().is_malformed());
        assert!(decode_line("").unwrap_err().is_malformed());
    }

    #[test]
    fn test_decode_rejects_non_numeric() {
        let err = decode_line("2024-01-01|09:00:00|x|y|ten").unwrap_err();
        assert!(err.to_string().contains("invalid amount"));

        let err = decode_line("2024-01-01|09:00:00|x|y|Food|-1.00|lots").unwrap_err();
        assert!(err.to_string().contains("invalid balance"));
    }

    #[test]
    fn test_schema_table() {
        assert_eq!(schema_for(5).unwrap().name, "legacy");
        assert_eq!(schema_for(7).unwrap().name, "current");
        assert!(schema_for(4).is_none());
    }
}

//! Command handlers.
//!
//! Each handler returns the text to print so the commands can be tested
//! without capturing stdout.

use std::fmt::Write as _;

use moneta_core::{
    CurrencyRegistry, ExchangeRate, Money, MoneyStyle, MoneyTextCodec,
};
use moneta_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use tracing::info;

/// `moneta format <amount> <code> [style]`
pub fn format(
    codec: &MoneyTextCodec<'_>,
    registry: &CurrencyRegistry,
    amount: Decimal,
    code: &str,
    style: Option<&str>,
) -> AppResult<String> {
    let money = Money::from_code(amount, code, registry)?;
    let text = codec.format_with(&money, style.unwrap_or("C"))?;
    Ok(text)
}

/// `moneta parse <text> [--currency CODE]`
pub fn parse(
    codec: &MoneyTextCodec<'_>,
    registry: &CurrencyRegistry,
    text: &str,
    currency: Option<&str>,
) -> AppResult<String> {
    let money = match currency {
        Some(code) => codec.parse_with_currency(text, &registry.from_code(code)?)?,
        None => codec.parse(text)?,
    };
    info!(input = %text, money = %money, "Parsed");
    Ok(format!("{money} ({})", money.currency().english_name()))
}

/// `moneta convert <amount> <from> <to> <rate>`
pub fn convert(
    codec: &MoneyTextCodec<'_>,
    registry: &CurrencyRegistry,
    amount: Decimal,
    from: &str,
    to: &str,
    rate: Decimal,
) -> AppResult<String> {
    let rate = ExchangeRate::new(registry.from_code(from)?, registry.from_code(to)?, rate)?;
    let source = Money::from_code(amount, from, registry)?;
    let target = rate.convert(&source)?;

    let style = MoneyStyle::international();
    Ok(format!(
        "{} = {} @ {rate}",
        codec.format(&source, &style),
        codec.format(&target, &style)
    ))
}

/// `moneta split <amount> <code> <shares>` or `--ratios 1,2,3`
pub fn split(
    codec: &MoneyTextCodec<'_>,
    registry: &CurrencyRegistry,
    amount: Decimal,
    code: &str,
    shares: Option<usize>,
    ratios: &[u32],
) -> AppResult<String> {
    let total = Money::from_code(amount, code, registry)?;
    let parts = match (shares, ratios.is_empty()) {
        (Some(shares), true) => total.safe_divide(shares)?,
        (None, false) => total.safe_divide_by_ratios(ratios)?,
        _ => {
            return Err(AppError::Usage(
                "give either a share count or --ratios, not both".to_string(),
            ));
        }
    };

    let style = MoneyStyle::symbol();
    let lines: Vec<String> = parts.iter().map(|part| codec.format(part, &style)).collect();
    Ok(lines.join("\n"))
}

/// `moneta currencies [--namespace NS] [--active]`
pub fn currencies(
    registry: &CurrencyRegistry,
    namespace: Option<&str>,
    active_only: bool,
) -> String {
    let mut out = String::new();
    for currency in registry.get_all() {
        if namespace.is_some_and(|ns| ns != currency.namespace()) {
            continue;
        }
        if active_only && currency.is_obsolete() {
            continue;
        }
        let _ = writeln!(
            out,
            "{:<4} {:>3} {:>2} {:<5} {}",
            currency.code(),
            currency.numeric_code(),
            currency.decimal_digits(),
            currency.symbol(),
            currency.english_name()
        );
    }
    out
}

use networth::currency::{
    format_axis_thousands, format_currency_value, format_goal_marker, format_period, parse_amount,
    LocaleConfig,
};
use networth::networth_domain::PeriodLabel;

#[test]
fn formats_balances_per_locale() {
    let es = LocaleConfig::for_tag("es-ES");
    let en = LocaleConfig::for_tag("en-US");
    let fr = LocaleConfig::for_tag("fr-FR");

    assert_eq!(format_currency_value(7500.0, "EUR", &es), "7500,00 €");
    assert_eq!(format_currency_value(93_120.4, "EUR", &es), "93.120,40 €");
    assert_eq!(format_currency_value(7500.0, "USD", &en), "$7,500.00");
    assert_eq!(format_currency_value(-250.0, "USD", &en), "-$250.00");
    assert_eq!(format_currency_value(1500.0, "JPY", &fr), "1 500 ¥");
}

#[test]
fn goal_marker_and_axis_labels() {
    let es = LocaleConfig::for_tag("es-ES");
    let en = LocaleConfig::default();

    assert_eq!(format_goal_marker(&es, 100_000.0, "EUR"), "Objetivo: 100K €");
    assert_eq!(format_goal_marker(&es, 12_500.0, "EUR"), "Objetivo: 12,5K €");
    assert_eq!(format_goal_marker(&en, 250_000.0, "USD"), "Goal: $250K");
    assert_eq!(format_axis_thousands(93_400.0, "EUR"), "€93k");
}

#[test]
fn period_labels_follow_language() {
    let period = PeriodLabel { year: 2033, month: 8 };
    assert_eq!(format_period(&LocaleConfig::for_tag("es"), &period), "agosto de 2033");
    assert_eq!(format_period(&LocaleConfig::default(), &period), "August 2033");
}

#[test]
fn parses_typed_amounts() {
    assert_eq!(parse_amount("7500"), Some(7500.0));
    assert_eq!(parse_amount(" 7500,50 "), Some(7500.5));
    assert_eq!(parse_amount("7.500,50"), Some(7500.5));
    assert_eq!(parse_amount("7,500.50"), Some(7500.5));
    assert_eq!(parse_amount("-20"), Some(-20.0));
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("12abc"), None);
    assert_eq!(parse_amount("inf"), None);
}

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Weekday};
use extkit::prelude::*;
use extkit::Settings;

/// 安裝設定會影響整個行程，所以集中在單一測試裡依序驗證
#[test]
fn test_installed_settings_drive_locale_formatting() -> Result<()> {
    let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(); // Wednesday

    assert_eq!(1234.5f64.to_money_string(), "$1,234.50");
    assert_eq!(date.to_date_string(), "06/05/2024");
    assert_eq!(date.start_of_week().weekday(), Weekday::Sun);

    let rejected = Settings::from_toml_str("[compression]\nlevel = 42\n")?;
    assert!(Settings::install(rejected).is_err());
    assert_eq!(Settings::current(), Settings::default());

    let european = Settings::from_toml_str(
        r#"
[locale]
currency_symbol = "€"
thousands_separator = "."
decimal_separator = ","
week_start = "monday"
date_format = "%d.%m.%Y"

[compression]
level = 9
"#,
    )?;
    Settings::install(european)?;

    assert_eq!(1234.5f64.to_money_string(), "€1.234,50");
    assert_eq!((-42.5f64).to_money_string(), "-€42,50");
    assert_eq!(date.to_date_string(), "05.06.2024");
    assert_eq!(date.start_of_week(), NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());

    let data = "level nine ".repeat(50).into_bytes();
    assert_eq!(data.gzip()?.gunzip()?, data);

    Settings::install(Settings::default())?;
    assert_eq!(1234.5f64.to_money_string(), "$1,234.50");
    Ok(())
}

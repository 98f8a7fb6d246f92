use ticker_match::match_company_names;

fn main() {
    env_logger::init();

    let reference_list = vec![
        ("FNMA".to_string(), "Fannie Mae".to_string()),
        (
            "AIG".to_string(),
            "American International Group".to_string(),
        ),
    ];

    let query_names = vec![
        "Fannie Mae Inc".to_string(),
        "IBM".to_string(),
        "Acme Widgets".to_string(),
    ];

    for record in match_company_names(&reference_list, &query_names) {
        println!(
            "{} -> {} ({})",
            record.original_name,
            record.matched_ticker.as_deref().unwrap_or("-"),
            record.tier.map_or("UNRESOLVED", |tier| tier.as_str())
        );
    }
}

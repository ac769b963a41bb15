use std::path::Path;

use catalog_core::CatalogService;
use rust_decimal::Decimal;

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["catalog-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(!cli.json);
}

#[test]
fn parses_list_with_defaults() {
    let cli = Cli::try_parse_from(["catalog-cli", "list"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::List {
            page: None,
            page_size: None
        })
    ));
}

#[test]
fn parses_list_with_paging() {
    let cli = Cli::try_parse_from(["catalog-cli", "list", "--page", "2", "--page-size", "3"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::List {
            page: Some(ref page),
            page_size: Some(ref size),
        }) if page == "2" && size == "3"
    ));
}

#[test]
fn list_accepts_negative_page_for_the_pipeline_to_reject() {
    let cli = Cli::try_parse_from(["catalog-cli", "list", "--page", "-1"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::List { page: Some(ref page), .. }) if page == "-1"
    ));
}

#[test]
fn parses_get_with_raw_id() {
    let cli = Cli::try_parse_from(["catalog-cli", "get", "abc"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Get { ref id }) if id == "abc"
    ));
}

#[test]
fn get_requires_an_id() {
    assert!(Cli::try_parse_from(["catalog-cli", "get"]).is_err());
}

#[test]
fn parses_price_limits() {
    let cli =
        Cli::try_parse_from(["catalog-cli", "price-limits"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::PriceLimits)));
}

#[test]
fn parses_filter_with_search() {
    let cli = Cli::try_parse_from([
        "catalog-cli",
        "filter",
        "--min-price",
        "9.00",
        "--max-price",
        "9.99",
        "--search",
        "ultra",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Filter {
            min_price: Some(ref min),
            max_price: Some(ref max),
            page: None,
            page_size: None,
            search: Some(ref search),
        }) if min == "9.00" && max == "9.99" && search == "ultra"
    ));
}

#[test]
fn filter_bounds_are_optional_at_parse_time() {
    let cli = Cli::try_parse_from(["catalog-cli", "filter", "--min-price", "9"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Filter {
            max_price: None,
            ..
        })
    ));
}

#[test]
fn global_flags_work_after_subcommand() {
    let cli = Cli::try_parse_from([
        "catalog-cli",
        "price-limits",
        "--json",
        "--data",
        "./config/catalog.yaml",
    ])
    .expect("expected valid cli args");
    assert!(cli.json);
    assert_eq!(
        cli.data.as_deref(),
        Some(Path::new("./config/catalog.yaml"))
    );
}

#[test]
fn parses_validate_path() {
    let cli = Cli::try_parse_from(["catalog-cli", "validate", "catalog.yaml"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Validate { ref path }) if path == Path::new("catalog.yaml")
    ));
}

// -------------------------------------------------------------------------
// Handlers and rendering
// -------------------------------------------------------------------------

fn service() -> CatalogService {
    catalog::open_service(None).expect("built-in catalog")
}

#[test]
fn filter_handler_surfaces_catalog_errors() {
    let args = catalog::FilterArgs {
        min_price: Some("10"),
        max_price: Some("9"),
        paging: catalog::PageArgs::default(),
        search: "",
    };
    let err = catalog::run_filter(&service(), &args, true).unwrap_err();
    let catalog_err = err.downcast_ref::<CatalogError>().expect("catalog error");
    assert_eq!(catalog_err.reason(), "minPriceCannotBeGreaterThanMaxPrice");
}

#[test]
fn page_args_zero_and_junk_fall_back_to_defaults() {
    let paging = catalog::PageArgs {
        page: Some("0"),
        page_size: Some("lots"),
    };
    assert_eq!(paging.resolve(), (1, 16));
    assert_eq!(catalog::PageArgs::default().resolve(), (1, 16));
}

#[test]
fn page_args_keep_negative_values() {
    let paging = catalog::PageArgs {
        page: Some("-1"),
        page_size: Some("3"),
    };
    assert_eq!(paging.resolve(), (-1, 3));
}

#[test]
fn list_handler_treats_page_zero_as_first_page() {
    let paging = catalog::PageArgs {
        page: Some("0"),
        page_size: None,
    };
    assert!(catalog::run_list(&service(), &paging, true).is_ok());
}

#[test]
fn list_handler_rejects_negative_page() {
    let paging = catalog::PageArgs {
        page: Some("-1"),
        page_size: None,
    };
    let err = catalog::run_list(&service(), &paging, true).unwrap_err();
    let catalog_err = err.downcast_ref::<CatalogError>().expect("catalog error");
    assert_eq!(catalog_err.reason(), "pageMustBePositive");
}

#[test]
fn filter_handler_treats_page_zero_as_first_page() {
    let args = catalog::FilterArgs {
        min_price: Some("8.99"),
        max_price: Some("10.99"),
        paging: catalog::PageArgs {
            page: Some("0"),
            page_size: Some("0"),
        },
        search: "",
    };
    assert!(catalog::run_filter(&service(), &args, true).is_ok());
}

#[test]
fn get_handler_rejects_zero_id() {
    let err = catalog::run_get(&service(), "0", true).unwrap_err();
    let catalog_err = err.downcast_ref::<CatalogError>().expect("catalog error");
    assert_eq!(catalog_err.reason(), "idProductRequired");
}

#[test]
fn open_service_reports_missing_file() {
    let err = catalog::open_service(Some(Path::new("/no/such/catalog.yaml"))).unwrap_err();
    assert!(err.downcast_ref::<CatalogError>().is_none());
    assert!(err.to_string().contains("failed to load catalog"));
}

#[test]
fn render_page_lists_products_in_sales_order() {
    let result = service().list_products(1, 2).expect("list");
    let table = output::render_page(&result);
    let lines: Vec<&str> = table.lines().collect();

    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].contains("Monster Energy Original"));
    assert!(lines[1].contains("8.99"));
    assert!(lines[2].contains("Monster Energy Ultra"));
    assert_eq!(lines[3], "page 1 of 3 (5 products)");
}

#[test]
fn render_page_past_the_end_says_so() {
    let result = service().list_products(9, 16).expect("list");
    assert_eq!(
        output::render_page(&result),
        "no products on page 9 (5 matching in total)\n"
    );
}

#[test]
fn render_detail_includes_nutrition_and_distribution() {
    let detail = service().get_product(3).expect("product 3");
    let text = output::render_detail(&detail);

    assert!(text.starts_with("Monster Energy Juice (#3)"));
    assert!(text.contains("price:      10.99"));
    assert!(text.contains("rating:     4.2 (3 reviews)"));
    assert!(text.contains("5: 1  4: 2  3: 0  2: 0  1: 0"));
    assert!(text.contains("sugars:     42g"));
    assert!(text.contains("C 100% DV"));
    assert!(text.contains("allergens:  none"));
}

#[test]
fn render_summary_reports_counts_and_limits() {
    let summary = output::CatalogSummary {
        products: 5,
        nutrition_records: 5,
        reviews: 17,
        price_limits: catalog_core::PriceLimits {
            min_price: Decimal::new(899, 2),
            max_price: Decimal::new(1099, 2),
        },
    };
    assert_eq!(
        output::render_summary(&summary),
        "catalog ok: 5 products, 5 nutrition records, 17 reviews, prices 8.99 to 10.99"
    );
}

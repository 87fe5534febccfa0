use log4rs;
use std::error::Error;
use vnet_gap_summary::output::print_reports;
use vnet_gap_summary::{build_reports, check_for_duplicate_vnets, get_sorted_vnets};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let cache_file = std::env::args().nth(1);
    let inventory =
        get_sorted_vnets(cache_file.as_deref()).expect("Error reading vnets from cache");
    check_for_duplicate_vnets(&inventory).expect("Error validating vnets");

    let reports = build_reports(&inventory).expect("Error building vnet reports");
    print_reports(&reports)?;

    Ok(())
}

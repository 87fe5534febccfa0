//! Terminal output for VNet gap reports.
//!
//! Renders computed [`VnetReport`]s; all arithmetic happens upstream.

use crate::models::Prefix;
use crate::processing::VnetReport;
use colored::Colorize;
use std::error::Error;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render a prefix list as a comma-separated string.
fn format_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

/// Print a single VNet report to stdout.
pub fn print_vnet_report(report: &VnetReport) {
    println!(
        "VNET: '{vnet_name}' '{subs}' ({location}) - {cidrs} = {count} addresses",
        vnet_name = report.vnet_name,
        subs = report.subscription_name,
        location = report.location,
        cidrs = format_prefixes(&report.address_prefixes),
        count = report.address_count,
    );

    for subnet in &report.subnets {
        println!(
            "  {name} {cidrs} {count}",
            name = format_field(&subnet.subnet_name, 26),
            cidrs = format_field(format_prefixes(&subnet.address_prefixes), 20),
            count = format_field(format!("{}_ips", subnet.address_count), 12),
        );
    }

    for pg in &report.prefix_gaps {
        if pg.gaps.is_empty() {
            println!(
                "  {tag} {prefix} fully allocated",
                tag = "-full-".green(),
                prefix = pg.prefix
            );
            continue;
        }
        for gap in &pg.gaps {
            println!(
                "  {tag} {range} => {cidrs}",
                tag = "-gap-".red(),
                range = gap.range,
                cidrs = format_prefixes(&gap.cidrs),
            );
        }
    }
}

/// Print every VNet report, with a trailing note.
pub fn print_reports(reports: &[VnetReport]) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_reports()");
    log::info!("# Got vnet count = {}", reports.len());

    let mut gap_count = 0;
    for report in reports {
        print_vnet_report(report);
        gap_count += report
            .prefix_gaps
            .iter()
            .map(|pg| pg.gaps.len())
            .sum::<usize>();
        println!();
    }

    println!(
        "#{}# End report: {} VNets, {} gaps",
        "NOTE".on_red(),
        reports.len(),
        gap_count
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_format_prefixes() {
        let prefixes = vec![
            Prefix::new("10.0.0.0/24").unwrap(),
            Prefix::new("192.168.0.0/16").unwrap(),
        ];
        assert_eq!(format_prefixes(&prefixes), "10.0.0.0/24, 192.168.0.0/16");
    }
}

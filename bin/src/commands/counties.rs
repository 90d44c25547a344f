//! Counties command implementation.

use crate::display::parse_province;
use anyhow::Result;
use ppr_lib::prelude::*;

/// List counties, optionally restricted to one province.
pub(crate) fn list_counties(province: Option<&str>) -> Result<()> {
    let counties: Vec<County> = match province {
        Some(p) => County::in_province(parse_province(p)?).collect(),
        None => County::all().to_vec(),
    };

    println!("{:<12} {:<10}", "COUNTY", "PROVINCE");
    println!("{}", "-".repeat(23));

    for county in &counties {
        println!("{:<12} {:<10}", county.name(), county.province().as_str());
    }

    println!("\nTotal: {} counties", counties.len());
    Ok(())
}

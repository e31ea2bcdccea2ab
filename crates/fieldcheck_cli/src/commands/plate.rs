use anyhow::{Context, Result};
use fieldcheck_core::LicensePlateValidator;
use fieldcheck_validator::PlateCountry;
use tracing::info;

use crate::output::{self, PlateCheck};

pub fn execute(plates: &[String], country: &str, format: &str) -> Result<()> {
    let country: PlateCountry = country
        .parse()
        .with_context(|| format!("Cannot validate plates for country '{}'", country))?;

    info!(
        "Validating {} license plate(s) for country: {}",
        plates.len(),
        country
    );

    let validator = country.validator();
    let checks: Vec<PlateCheck> = plates
        .iter()
        .map(|plate| PlateCheck {
            input: plate.clone(),
            normalized: country.normalize(plate),
            valid: validator.is_valid_str(plate),
        })
        .collect();

    output::print_plate_report(&checks, format)?;

    if checks.iter().any(|check| !check.valid) {
        std::process::exit(1);
    }

    Ok(())
}

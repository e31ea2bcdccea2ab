use anyhow::{Context, Result};
use fieldcheck_core::{CompletenessValidator, ContactInformationBuilder};
use fieldcheck_parser::parse_file;
use fieldcheck_validator::CompletenessPolicy;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    record: Option<&Path>,
    email: Option<String>,
    mobile: Option<String>,
    policy: &str,
    format: &str,
) -> Result<()> {
    let policy: CompletenessPolicy = policy
        .parse()
        .context("Invalid completeness policy")?;

    let mut builder = match record {
        Some(path) => {
            info!("Reading contact record: {}", path.display());
            let info = parse_file(path)
                .with_context(|| format!("Failed to parse record file: {}", path.display()))?;
            ContactInformationBuilder::from_record(info)
        }
        None => ContactInformationBuilder::new(),
    };

    if let Some(email) = email {
        builder = builder.email(email);
    }
    if let Some(mobile) = mobile {
        builder = builder.mobile_number(mobile);
    }
    let info = builder.build();

    info!("Checking completeness with policy: {}", policy);
    let findings = policy.validator().check_completeness(&info);

    output::print_completeness_report(&findings, policy, format)?;

    if !findings.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

use anyhow::Result;
use colored::*;
use fieldcheck_core::ValidationResult;
use fieldcheck_validator::CompletenessPolicy;
use serde_json::json;

/// Outcome of validating a single plate.
#[derive(Debug, Clone)]
pub struct PlateCheck {
    pub input: String,
    pub normalized: String,
    pub valid: bool,
}

/// Maps findings to the messages shown to the user.
///
/// A record missing every contact channel gets the generic message instead of
/// one message per channel.
pub fn compose_messages(findings: &[ValidationResult]) -> Vec<&'static str> {
    let all_missing = findings.contains(&ValidationResult::MissingEmail)
        && findings.contains(&ValidationResult::MissingMobile);

    if all_missing {
        return vec![ValidationResult::MissingContactInfoGeneric.message()];
    }

    findings.iter().map(|finding| finding.message()).collect()
}

pub fn print_plate_report(checks: &[PlateCheck], format: &str) -> Result<()> {
    match format {
        "json" => print_plate_json(checks),
        _ => {
            print_plate_text(checks);
            Ok(())
        }
    }
}

fn print_plate_text(checks: &[PlateCheck]) {
    for check in checks {
        if check.valid {
            println!(
                "{} {} {}",
                "✓".green().bold(),
                check.input.green(),
                format!("({})", check.normalized).dimmed()
            );
        } else {
            println!(
                "{} {} {}",
                "✗".red().bold(),
                check.input.red(),
                format!("({})", check.normalized).dimmed()
            );
        }
    }

    let invalid = checks.iter().filter(|check| !check.valid).count();
    println!("\n{}", "Summary:".bold());
    println!("  Valid:   {}", checks.len() - invalid);
    println!("  Invalid: {}", invalid);
}

fn print_plate_json(checks: &[PlateCheck]) -> Result<()> {
    let output = json!({
        "passed": checks.iter().all(|check| check.valid),
        "plates": checks
            .iter()
            .map(|check| json!({
                "input": check.input,
                "normalized": check.normalized,
                "valid": check.valid,
            }))
            .collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_completeness_report(
    findings: &[ValidationResult],
    policy: CompletenessPolicy,
    format: &str,
) -> Result<()> {
    match format {
        "json" => print_completeness_json(findings, policy),
        _ => {
            print_completeness_text(findings, policy);
            Ok(())
        }
    }
}

fn print_completeness_text(findings: &[ValidationResult], policy: CompletenessPolicy) {
    println!("{} {}", "Policy:".bold(), policy);

    if findings.is_empty() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Contact information is complete".green().bold()
        );
        return;
    }

    println!(
        "\n{} {}",
        "✗".red().bold(),
        "Contact information is incomplete".red().bold()
    );

    println!("\n{}", "Findings:".red().bold());
    for (i, finding) in findings.iter().enumerate() {
        println!("  {}. {}", i + 1, finding.code().red());
    }

    println!("\n{}", "Messages:".bold());
    for message in compose_messages(findings) {
        println!("  {}", message);
    }
}

fn print_completeness_json(findings: &[ValidationResult], policy: CompletenessPolicy) -> Result<()> {
    let output = json!({
        "policy": policy.name(),
        "complete": findings.is_empty(),
        "findings": findings,
        "messages": compose_messages(findings),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

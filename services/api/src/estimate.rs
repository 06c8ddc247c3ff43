use crate::infra::build_catalog;
use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use toeslagen::benefits::{
    calculate, EligibilityResults, EligibilityServiceError, IntakeGuard, ProgramYear, WizardDraft,
};
use toeslagen::config::AppConfig;
use toeslagen::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// JSON file with the wizard answers (camelCase keys, unanswered questions may be omitted)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Program year to estimate against (defaults to TOESLAGEN_PROGRAM_YEAR)
    #[arg(long)]
    pub(crate) year: Option<u16>,
    /// Print the raw results as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RulesArgs {
    /// Program year to print (defaults to TOESLAGEN_PROGRAM_YEAR)
    #[arg(long)]
    pub(crate) year: Option<u16>,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs { input, year, json } = args;
    let config = AppConfig::load()?;
    let catalog = build_catalog(&config.rules)?;

    let year = year.map(ProgramYear).unwrap_or(config.rules.program_year);
    let rules = catalog
        .get(year)
        .ok_or(EligibilityServiceError::UnknownProgramYear(year))?;

    let reader = BufReader::new(File::open(&input)?);
    let draft: WizardDraft = serde_json::from_reader(reader)?;
    let household = IntakeGuard::default()
        .input_from_draft(&draft)
        .map_err(EligibilityServiceError::from)?;

    let results = calculate(&household, &rules);
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("{}", render_estimate(&results));
    }
    Ok(())
}

pub(crate) fn run_rules(args: RulesArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = build_catalog(&config.rules)?;

    let year = args
        .year
        .map(ProgramYear)
        .unwrap_or(config.rules.program_year);
    let rules = catalog
        .get(year)
        .ok_or(EligibilityServiceError::UnknownProgramYear(year))?;

    println!("{}", serde_json::to_string_pretty(rules.as_ref())?);
    Ok(())
}

pub(crate) fn render_estimate(results: &EligibilityResults) -> String {
    let mut lines = vec![format!("Toeslagen estimate ({})", results.program_year)];

    for (scheme, result) in results.iter() {
        if result.eligible {
            lines.push(format!(
                "  {:<22} eligible      EUR {:>10.2} / year",
                scheme.label(),
                result.estimated_annual_amount
            ));
        } else {
            lines.push(format!("  {:<22} not eligible", scheme.label()));
            for reason in &result.reasons {
                lines.push(format!("      - {} ({})", reason.summary(), reason.code()));
            }
        }
    }

    lines.push(format!(
        "  {:<22}               EUR {:>10.2} / year",
        "Total",
        results.total_estimated_annual_amount
    ));
    lines.join("\n")
}

//! Report export command.

use imc_data::report::{build_report, CAMPAIGN_REPORT_FILENAME};
use imc_data::scenario::CampaignScenario;
use log::info;

/// Generate the reference scenario and write the channel-performance
/// report CSV to `output` (or the fixed report filename).
pub fn run_export(output: Option<&str>, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = crate::rng_for(seed);
    let scenario = CampaignScenario::generate(&mut rng)?;
    let contents = build_report(&scenario.channels)?;

    let path = output.unwrap_or(CAMPAIGN_REPORT_FILENAME);
    std::fs::write(path, contents)?;
    info!(
        "Wrote report for {} channels to {}",
        scenario.channels.len(),
        path
    );
    Ok(())
}

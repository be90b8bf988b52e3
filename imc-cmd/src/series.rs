//! Daily-series dump command.

use imc_data::aggregate;
use imc_data::scenario::CampaignScenario;
use log::info;

/// Generate the reference scenario and write the campaign-wide daily
/// totals to `output` as `date,reach,engagement` rows.
pub fn run_dump(output: &str, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = crate::rng_for(seed);
    let scenario = CampaignScenario::generate(&mut rng)?;
    let totals = aggregate::campaign_totals(&scenario.channels)?;

    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(["date", "reach", "engagement"])?;
    for point in &totals {
        writer.write_record([
            point.date.clone(),
            point.reach.to_string(),
            point.engagement.to_string(),
        ])?;
    }
    writer.flush()?;
    info!("Wrote {} daily totals to {}", totals.len(), output);
    Ok(())
}

//! Terminal vesting report: yearly table plus the summary block, no GUI.

use anyhow::{Result, bail};
use clap::Parser;
use tabled::{Table, Tabled, settings::Style};

use vest_scope::analysis::{MonthlyPrices, project_timeline, summarize};
use vest_scope::config::{GrowthPct, SchemeId, UsdPrice};
use vest_scope::domain::{VestingSchedule, VestingScheme};
use vest_scope::utils::format_month_count;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print a vesting projection as a table")]
struct ReportArgs {
    /// Scheme: accelerator | steady-builder | slow-burn
    #[arg(long, default_value = "accelerator")]
    scheme: String,

    /// Annual growth assumption in percent
    #[arg(long, default_value_t = 30.0)]
    growth: f64,

    /// Projection horizon in months
    #[arg(long, default_value_t = 120)]
    horizon: u32,

    /// Starting BTC price in USD
    #[arg(long, default_value_t = 100_000.0)]
    price: f64,
}

#[derive(Tabled)]
struct YearRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Granted")]
    granted: String,
    #[tabled(rename = "Vested")]
    vested: String,
    #[tabled(rename = "Unvested")]
    unvested: String,
    #[tabled(rename = "BTC Price")]
    price: String,
    #[tabled(rename = "USD Value")]
    value: String,
}

fn parse_scheme(name: &str) -> Result<SchemeId> {
    match name.to_lowercase().as_str() {
        "accelerator" => Ok(SchemeId::Accelerator),
        "steady-builder" | "builder" => Ok(SchemeId::SteadyBuilder),
        "slow-burn" | "slowburn" => Ok(SchemeId::SlowBurn),
        other => bail!("unknown scheme '{}'", other),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = ReportArgs::parse();

    let scheme = VestingScheme::from_preset(parse_scheme(&args.scheme)?);
    let schedule = VestingSchedule::new(scheme.vesting.clone())?;

    let prices = MonthlyPrices::Projected {
        start: UsdPrice::new(args.price),
        annual_growth: GrowthPct::new(args.growth / 100.0),
    };

    let timeline = project_timeline(&scheme, &schedule, &prices, args.horizon);
    let summary = summarize(&timeline, &scheme, &schedule);

    let rows: Vec<YearRow> = (0..timeline.len())
        .step_by(12)
        .map(|idx| {
            let p = timeline.point(idx);
            YearRow {
                month: p.month,
                granted: format!("{}", p.total_balance),
                vested: format!("{}", p.employee_balance),
                unvested: format!("{}", p.employer_balance),
                price: format!("{}", p.bitcoin_price),
                value: format!("{}", p.usd_value),
            }
        })
        .collect();

    println!(
        "\n{} | {} over {}",
        scheme.id,
        prices_label(&args),
        format_month_count(args.horizon)
    );
    println!("{}", Table::new(rows).with(Style::rounded()));

    println!("\nTotal grant:      {}", summary.total_granted);
    println!("At horizon:       {} ({})", summary.vested_at_horizon, summary.value_at_horizon);
    println!("Growth multiple:  {:.2}x", summary.growth_multiple);
    match summary.next_unlock {
        Some(unlock) => println!(
            "Next unlock:      {} to {}",
            format_month_count(unlock.month.round() as u32),
            unlock.grant_percent
        ),
        None => println!("Next unlock:      fully vested"),
    }

    Ok(())
}

fn prices_label(args: &ReportArgs) -> String {
    format!("${:.0} start, {:+.0}%/yr", args.price, args.growth)
}

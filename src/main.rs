//! uniseed CLI
//!
//! スプレッドシートからJSONドキュメントとSQLシードスクリプトを生成するコマンドラインツール。

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use uniseed::{EmptyTablePolicy, JsonLayout, RecordOrder, SeedBuilder, SqlQuoting, UniSeedError};

#[derive(Parser, Debug)]
#[command(name = "uniseed")]
#[command(about = "Generate university/faculty/department JSON and SQL seeds from a spreadsheet")]
#[command(version)]
struct Cli {
    /// Input workbook (xlsx, xlsm, xls, ods)
    #[arg(long, short, env = "UNISEED_INPUT", default_value = "universiteler.xlsx")]
    input: PathBuf,

    /// Sheet to read
    #[arg(long, short, env = "UNISEED_SHEET", default_value = uniseed::DEFAULT_SHEET_NAME)]
    sheet: String,

    /// Directory the six output files are written to
    #[arg(long, short, env = "UNISEED_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Order of universities and faculties in the outputs
    #[arg(long, value_enum, default_value_t = OrderArg::ByCode)]
    order: OrderArg,

    /// Shape of university.json and faculties.json
    #[arg(long, value_enum, default_value_t = LayoutArg::Keyed)]
    json_layout: LayoutArg,

    /// Double embedded single quotes in SQL literals
    #[arg(long)]
    escape_quotes: bool,

    /// Emit `INSERT ... VALUES ;` for empty tables instead of omitting the insert
    #[arg(long)]
    literal_empty_sql: bool,

    /// Skip fully blank data rows instead of failing on them
    #[arg(long)]
    skip_blank_rows: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    ByCode,
    FirstSeen,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutArg {
    Keyed,
    Array,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), UniSeedError> {
    let order = match cli.order {
        OrderArg::ByCode => RecordOrder::ByCode,
        OrderArg::FirstSeen => RecordOrder::FirstSeen,
    };
    let layout = match cli.json_layout {
        LayoutArg::Keyed => JsonLayout::Keyed,
        LayoutArg::Array => JsonLayout::Array,
    };
    let quoting = if cli.escape_quotes {
        SqlQuoting::Escaped
    } else {
        SqlQuoting::Verbatim
    };
    let empty_policy = if cli.literal_empty_sql {
        EmptyTablePolicy::Literal
    } else {
        EmptyTablePolicy::OmitInsert
    };

    let generator = SeedBuilder::new()
        .with_sheet_name(cli.sheet.clone())
        .with_output_dir(cli.out_dir.clone())
        .with_record_order(order)
        .with_json_layout(layout)
        .with_sql_quoting(quoting)
        .with_empty_table_policy(empty_policy)
        .skip_blank_rows(cli.skip_blank_rows)
        .build()?;

    log::info!(
        "Reading sheet '{}' from {}",
        generator.sheet_name(),
        cli.input.display()
    );

    let report = generator.run_file(&cli.input)?;
    for path in &report.files {
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}

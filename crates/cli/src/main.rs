//! # sheetkit-cli
//!
//! Command-line interface for reading, writing and formatting spreadsheet
//! ranges through sheetkit.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use colored::Colorize;
use comfy_table::Table;
use sheetkit_core::batch::batch_update_body;
use sheetkit_core::format::{self, Borders};
use sheetkit_core::{a1, ops, values, CellInput, GridError, GridResult, SheetSelector, SheetsApi};
use sheetkit_http::{ClientConfig, SheetsClient};
use sheetkit_types::{
    BatchUpdateSpreadsheetRequest, BatchUpdateSpreadsheetResponse, Border, BorderStyle, Color,
    Dimension, HorizontalAlign, NumberFormatType, Request, Spreadsheet, ValueRange,
    ValueRenderOption, VerticalAlign, WrapStrategy,
};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// sheetkit - build and send spreadsheet batch updates
#[derive(Parser)]
#[command(name = "sheetkit")]
#[command(author, version, about = "Spreadsheet batch-update and value helpers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// YAML config file (base_url, access_token, timeout_secs)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// OAuth bearer token; overrides config and SHEETKIT_ACCESS_TOKEN
    #[arg(long = "token", global = true)]
    token: Option<String>,

    /// API base URL
    #[arg(long = "base-url", global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", global = true)]
    timeout: Option<u64>,

    /// Print the batch-update body instead of sending it
    #[arg(long = "dry-run", global = true)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List the sheets of a spreadsheet
    Sheets {
        spreadsheet_id: String,
    },

    /// Read a range
    Get {
        spreadsheet_id: String,
        /// A1 range, e.g. "Data!A1:C10"
        range: String,
        #[arg(short, long, value_enum, default_value = "formatted")]
        render: RenderArg,
        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Write a JSON array of rows with its top-left corner at CELL
    Write {
        spreadsheet_id: String,
        /// Sheet title, or #ID for a numeric sheet id
        sheet: String,
        /// Top-left cell, e.g. "B2"
        cell: String,
        /// Rows as JSON, e.g. '[["Name", 1, true, "=A1"]]'
        rows: String,
    },

    /// Apply formatting to a range
    Format {
        spreadsheet_id: String,
        sheet: String,
        /// A1 range, e.g. "A1:D1"
        range: String,
        /// Make text bold
        #[arg(long, conflicts_with = "no_bold")]
        bold: bool,
        /// Make text not bold
        #[arg(long)]
        no_bold: bool,
        #[arg(long, value_enum)]
        wrap: Option<WrapArg>,
        #[arg(long, value_enum)]
        horizontal: Option<HorizontalArg>,
        #[arg(long, value_enum)]
        vertical: Option<VerticalArg>,
        #[arg(long = "number-format", value_enum)]
        number_format: Option<NumberFormatArg>,
        /// Number format pattern, e.g. "#,##0.00"
        #[arg(long, requires = "number_format")]
        pattern: Option<String>,
        /// Border style for every edge of the range
        #[arg(long, value_enum)]
        borders: Option<BorderArg>,
        /// Only draw the outer edges
        #[arg(long, requires = "borders")]
        outline: bool,
        /// Border color as RRGGBB hex, e.g. "#FF0000"
        #[arg(long = "border-color", value_parser = parse_color, requires = "borders")]
        border_color: Option<Color>,
    },

    /// Set row heights or column widths
    Resize {
        spreadsheet_id: String,
        sheet: String,
        #[arg(value_enum)]
        dimension: DimensionArg,
        /// First index (zero-based, inclusive)
        start: u32,
        /// Last index (zero-based, exclusive)
        end: u32,
        /// Size in pixels
        #[arg(long, conflicts_with = "auto", required_unless_present = "auto")]
        pixels: Option<u32>,
        /// Fit to content
        #[arg(long)]
        auto: bool,
    },

    /// Freeze leading rows and columns
    Freeze {
        spreadsheet_id: String,
        sheet: String,
        #[arg(long, default_value_t = 0)]
        rows: u32,
        #[arg(long, default_value_t = 0)]
        columns: u32,
    },

    /// Rename a sheet
    Rename {
        spreadsheet_id: String,
        sheet: String,
        title: String,
    },
}

/// Output format for read results.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Aligned columns (default)
    #[default]
    Table,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RenderArg {
    Formatted,
    Unformatted,
    Formula,
}

impl From<RenderArg> for ValueRenderOption {
    fn from(arg: RenderArg) -> Self {
        match arg {
            RenderArg::Formatted => ValueRenderOption::FormattedValue,
            RenderArg::Unformatted => ValueRenderOption::UnformattedValue,
            RenderArg::Formula => ValueRenderOption::Formula,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum WrapArg {
    Overflow,
    Legacy,
    Clip,
    Wrap,
}

impl From<WrapArg> for WrapStrategy {
    fn from(arg: WrapArg) -> Self {
        match arg {
            WrapArg::Overflow => WrapStrategy::OverflowCell,
            WrapArg::Legacy => WrapStrategy::LegacyWrap,
            WrapArg::Clip => WrapStrategy::Clip,
            WrapArg::Wrap => WrapStrategy::Wrap,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum HorizontalArg {
    Left,
    Center,
    Right,
}

impl From<HorizontalArg> for HorizontalAlign {
    fn from(arg: HorizontalArg) -> Self {
        match arg {
            HorizontalArg::Left => HorizontalAlign::Left,
            HorizontalArg::Center => HorizontalAlign::Center,
            HorizontalArg::Right => HorizontalAlign::Right,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum VerticalArg {
    Top,
    Middle,
    Bottom,
}

impl From<VerticalArg> for VerticalAlign {
    fn from(arg: VerticalArg) -> Self {
        match arg {
            VerticalArg::Top => VerticalAlign::Top,
            VerticalArg::Middle => VerticalAlign::Middle,
            VerticalArg::Bottom => VerticalAlign::Bottom,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum NumberFormatArg {
    Text,
    Number,
    Percent,
    Currency,
    Date,
    Time,
    DateTime,
    Scientific,
}

impl From<NumberFormatArg> for NumberFormatType {
    fn from(arg: NumberFormatArg) -> Self {
        match arg {
            NumberFormatArg::Text => NumberFormatType::Text,
            NumberFormatArg::Number => NumberFormatType::Number,
            NumberFormatArg::Percent => NumberFormatType::Percent,
            NumberFormatArg::Currency => NumberFormatType::Currency,
            NumberFormatArg::Date => NumberFormatType::Date,
            NumberFormatArg::Time => NumberFormatType::Time,
            NumberFormatArg::DateTime => NumberFormatType::DateTime,
            NumberFormatArg::Scientific => NumberFormatType::Scientific,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum BorderArg {
    Dotted,
    Dashed,
    Solid,
    Medium,
    Thick,
    Double,
    None,
}

impl From<BorderArg> for BorderStyle {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::Dotted => BorderStyle::Dotted,
            BorderArg::Dashed => BorderStyle::Dashed,
            BorderArg::Solid => BorderStyle::Solid,
            BorderArg::Medium => BorderStyle::SolidMedium,
            BorderArg::Thick => BorderStyle::SolidThick,
            BorderArg::Double => BorderStyle::Double,
            BorderArg::None => BorderStyle::None,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum DimensionArg {
    Rows,
    Columns,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Rows => Dimension::Rows,
            DimensionArg::Columns => Dimension::Columns,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    if let Err(e) = execute(cli).await {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

/// Build the client and run the subcommand.
async fn execute(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    match SheetsClient::new(config) {
        Ok(client) => run(&client, cli.command, cli.dry_run).await,
        // A dry run only needs the service to resolve sheet names.
        Err(e) if cli.dry_run => run(&Offline::new(e), cli.command, true).await,
        Err(e) => Err(e).context("Failed to create client"),
    }
}

/// Client binding for dry runs without a usable configuration. Every call
/// fails with the reason the real client could not be built.
struct Offline {
    reason: String,
}

impl Offline {
    fn new(err: GridError) -> Self {
        let reason = match err {
            GridError::Config(reason) => reason,
            other => other.to_string(),
        };
        Self { reason }
    }

    fn unavailable(&self) -> GridError {
        GridError::Config(format!(
            "{} (sheet names need the service; select by #ID on a dry run)",
            self.reason
        ))
    }
}

#[async_trait]
impl SheetsApi for Offline {
    async fn get_spreadsheet(&self, _spreadsheet_id: &str) -> GridResult<Spreadsheet> {
        Err(self.unavailable())
    }

    async fn batch_update(
        &self,
        _spreadsheet_id: &str,
        _body: &BatchUpdateSpreadsheetRequest,
    ) -> GridResult<BatchUpdateSpreadsheetResponse> {
        Err(self.unavailable())
    }

    async fn values_get(
        &self,
        _spreadsheet_id: &str,
        _range: &str,
        _render: ValueRenderOption,
    ) -> GridResult<ValueRange> {
        Err(self.unavailable())
    }
}

/// File (or environment) settings, then command-line overrides.
fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => ClientConfig::from_env()?,
    };

    if let Some(token) = &cli.token {
        config = config.with_access_token(token.clone());
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    Ok(config)
}

/// Run one subcommand against a client binding.
async fn run<A: SheetsApi>(api: &A, command: Command, dry_run: bool) -> Result<()> {
    match command {
        Command::Sheets { spreadsheet_id } => {
            let spreadsheet = api.get_spreadsheet(&spreadsheet_id).await?;
            for sheet in &spreadsheet.sheets {
                let props = &sheet.properties;
                let id = props.sheet_id.map(|id| id.to_string()).unwrap_or_default();
                println!(
                    "{:>12}  {}",
                    id.cyan(),
                    props.title.as_deref().unwrap_or_default()
                );
            }
            Ok(())
        }
        Command::Get {
            spreadsheet_id,
            range,
            render,
            format,
        } => {
            let rows = ops::read_range(api, &spreadsheet_id, &range, render.into()).await?;
            print_rows(&rows, format)
        }
        Command::Write {
            spreadsheet_id,
            sheet,
            cell,
            rows,
        } => {
            let rows = parse_rows(&rows)?;
            let (row, col) = a1::parse_a1(&cell)?;
            let sheet_id = ops::sheet_id(api, &spreadsheet_id, &parse_selector(&sheet)).await?;
            let request = values::write_values(sheet_id, row, col, &rows)?;
            send(api, &spreadsheet_id, vec![request], dry_run).await
        }
        Command::Format {
            spreadsheet_id,
            sheet,
            range,
            bold,
            no_bold,
            wrap,
            horizontal,
            vertical,
            number_format,
            pattern,
            borders,
            outline,
            border_color,
        } => {
            let sheet_id = ops::sheet_id(api, &spreadsheet_id, &parse_selector(&sheet)).await?;
            let range = a1::grid_range_from_a1(sheet_id, &range)?;

            let mut requests = Vec::new();
            if bold || no_bold {
                requests.push(format::bold(range, bold));
            }
            if let Some(wrap) = wrap {
                requests.push(format::wrap(range, wrap.into()));
            }
            if horizontal.is_some() || vertical.is_some() {
                requests.push(format::alignment(
                    range,
                    horizontal.map(Into::into),
                    vertical.map(Into::into),
                ));
            }
            if let Some(kind) = number_format {
                requests.push(format::number_format(range, kind.into(), pattern.as_deref()));
            }
            if let Some(style) = borders {
                let mut border = Border::new(style.into());
                if let Some(color) = border_color {
                    border = border.with_color(color);
                }
                let edges = if outline {
                    Borders::outline(border)
                } else {
                    Borders::all(border)
                };
                requests.push(format::borders(range, edges));
            }

            if requests.is_empty() {
                bail!("Nothing to format: pass at least one formatting option");
            }
            send(api, &spreadsheet_id, requests, dry_run).await
        }
        Command::Resize {
            spreadsheet_id,
            sheet,
            dimension,
            start,
            end,
            pixels,
            auto,
        } => {
            if end <= start {
                bail!("END must be greater than START ({start}..{end} is empty)");
            }
            let sheet_id = ops::sheet_id(api, &spreadsheet_id, &parse_selector(&sheet)).await?;
            let request = match (pixels, auto, dimension) {
                (_, true, dimension) => format::auto_resize(sheet_id, dimension.into(), start, end),
                (Some(px), false, DimensionArg::Rows) => format::row_height(sheet_id, start, end, px),
                (Some(px), false, DimensionArg::Columns) => {
                    format::column_width(sheet_id, start, end, px)
                }
                (None, false, _) => bail!("Pass --pixels or --auto"),
            };
            send(api, &spreadsheet_id, vec![request], dry_run).await
        }
        Command::Freeze {
            spreadsheet_id,
            sheet,
            rows,
            columns,
        } => {
            let sheet_id = ops::sheet_id(api, &spreadsheet_id, &parse_selector(&sheet)).await?;
            send(
                api,
                &spreadsheet_id,
                vec![format::freeze(sheet_id, rows, columns)],
                dry_run,
            )
            .await
        }
        Command::Rename {
            spreadsheet_id,
            sheet,
            title,
        } => {
            let sheet_id = ops::sheet_id(api, &spreadsheet_id, &parse_selector(&sheet)).await?;
            send(
                api,
                &spreadsheet_id,
                vec![format::rename_sheet(sheet_id, title)],
                dry_run,
            )
            .await
        }
    }
}

/// Apply requests, or print their batch body on a dry run.
async fn send<A: SheetsApi>(
    api: &A,
    spreadsheet_id: &str,
    requests: Vec<Request>,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        let body = batch_update_body(requests);
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let count = requests.len();
    ops::apply(api, spreadsheet_id, requests).await?;
    info!(spreadsheet_id, count, "batch update applied");
    println!("{} {count} request(s) applied", "OK".green().bold());
    Ok(())
}

/// "#123" selects by id, anything else by title.
fn parse_selector(sheet: &str) -> SheetSelector {
    sheet
        .strip_prefix('#')
        .and_then(|id| id.parse::<i64>().ok())
        .map_or_else(|| SheetSelector::from(sheet), SheetSelector::Id)
}

/// Parse a JSON array of row arrays into cell inputs.
fn parse_rows(json: &str) -> Result<Vec<Vec<CellInput>>> {
    let value: serde_json::Value = serde_json::from_str(json).context("Rows must be valid JSON")?;
    let serde_json::Value::Array(rows) = value else {
        bail!("Rows must be a JSON array of arrays");
    };

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| match row {
            serde_json::Value::Array(cells) => Ok(cells.into_iter().map(CellInput::from).collect()),
            _ => bail!("Row {} is not an array", i + 1),
        })
        .collect()
}

/// Display text of a read-back value.
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Print rows in the specified format.
fn print_rows(rows: &[Vec<serde_json::Value>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => write_csv(rows, io::stdout())?,
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("(empty range)");
            } else {
                println!("{}", render_table(rows));
            }
        }
    }
    Ok(())
}

/// Write rows as CSV. Read-back rows may be ragged.
fn write_csv<W: io::Write>(rows: &[Vec<serde_json::Value>], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    for row in rows {
        let record: Vec<String> = row.iter().map(display_value).collect();
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn render_table(rows: &[Vec<serde_json::Value>]) -> Table {
    let mut table = Table::new();
    for row in rows {
        table.add_row(row.iter().map(display_value).collect::<Vec<_>>());
    }
    table
}

/// "RRGGBB" or "#RRGGBB".
fn parse_color(text: &str) -> Result<Color, String> {
    let hex = text.strip_prefix('#').unwrap_or(text);
    let invalid = || format!("expected an RRGGBB hex color, got '{text}'");
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| invalid());
    Ok(Color::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_selector() {
        assert_eq!(parse_selector("#42"), SheetSelector::Id(42));
        assert_eq!(parse_selector("Data"), SheetSelector::Name("Data".to_string()));
        assert_eq!(parse_selector("#tag"), SheetSelector::Name("#tag".to_string()));
    }

    #[test]
    fn test_parse_rows() {
        let rows = parse_rows(r#"[["a", 1, true], [null, "=A1"]]"#).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], CellInput::Number(1.0));
        assert_eq!(rows[1][0], CellInput::Null);
    }

    #[test]
    fn test_parse_rows_errors() {
        assert!(parse_rows("{").is_err());
        assert!(parse_rows(r#"{"a": 1}"#).is_err());
        assert!(parse_rows(r"[[1], 2]").is_err());
    }

    #[test]
    fn test_render_table() {
        let rows = vec![
            vec![json!("Name"), json!("Qty")],
            vec![json!("Widget"), json!(12)],
            vec![json!("X")],
        ];
        let rendered = render_table(&rows).to_string();
        assert_eq!(rendered.lines().filter(|l| l.contains("Widget")).count(), 1);
        assert!(rendered.contains("12"));
        assert!(rendered.contains('X'));
    }

    #[test]
    fn test_write_csv_quotes_and_ragged_rows() {
        let rows = vec![
            vec![json!("plain"), json!("a,b"), json!("say \"hi\"")],
            vec![json!("a\rb"), json!(null)],
            vec![json!(true)],
        ];
        let mut out = Vec::new();
        write_csv(&rows, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "plain,\"a,b\",\"say \"\"hi\"\"\"\n\"a\rb\",\ntrue\n"
        );
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#FF0000").unwrap(), Color::from_rgb(255, 0, 0));
        assert_eq!(parse_color("00ff00").unwrap(), Color::from_rgb(0, 255, 0));
        assert!(parse_color("#FFF").is_err());
        assert!(parse_color("GG0000").is_err());
        assert!(parse_color("ééé").is_err());
    }

    #[tokio::test]
    async fn test_dry_run_by_id_without_token() {
        let offline = Offline::new(GridError::Config("access token is required".to_string()));
        let command = Command::Freeze {
            spreadsheet_id: "abc".to_string(),
            sheet: "#0".to_string(),
            rows: 1,
            columns: 0,
        };
        run(&offline, command, true).await.unwrap();
    }

    #[tokio::test]
    async fn test_dry_run_by_name_without_token_explains() {
        let offline = Offline::new(GridError::Config("access token is required".to_string()));
        let command = Command::Rename {
            spreadsheet_id: "abc".to_string(),
            sheet: "Data".to_string(),
            title: "Raw".to_string(),
        };
        let err = run(&offline, command, true).await.unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("access token is required"), "{message}");
        assert!(message.contains("#ID"), "{message}");
    }

    #[tokio::test]
    async fn test_execute_dry_run_needs_no_client() {
        let cli = Cli::try_parse_from([
            "sheetkit", "--dry-run", "--token", "", "freeze", "abc", "#0", "--rows", "1",
        ])
        .unwrap();
        execute(cli).await.unwrap();
    }

    #[tokio::test]
    async fn test_execute_reports_config_errors() {
        let cli = Cli::try_parse_from([
            "sheetkit", "--config", "/nonexistent/sheetkit.yaml", "sheets", "abc",
        ])
        .unwrap();
        let err = execute(cli).await.unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load config"));
    }

    #[test]
    fn test_parse_format_command() {
        let cli = Cli::try_parse_from([
            "sheetkit", "format", "abc", "Data", "A1:C1", "--bold", "--borders", "solid",
            "--outline", "--border-color", "#336699", "--dry-run",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert!(matches!(
            cli.command,
            Command::Format { bold: true, outline: true, borders: Some(BorderArg::Solid), .. }
        ));
        assert!(Cli::try_parse_from([
            "sheetkit", "format", "abc", "Data", "A1", "--border-color", "#336699",
        ])
        .is_err());
    }

    #[test]
    fn test_resize_requires_size() {
        assert!(Cli::try_parse_from(["sheetkit", "resize", "abc", "Data", "rows", "0", "3"]).is_err());
        assert!(Cli::try_parse_from([
            "sheetkit", "resize", "abc", "Data", "rows", "0", "3", "--auto", "--pixels", "20"
        ])
        .is_err());
    }
}

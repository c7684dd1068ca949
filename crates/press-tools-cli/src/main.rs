use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use press_impose::cover::{PaperStock, spine_width_mm};

#[derive(Parser)]
#[command(name = "presst", about = "Press imposition tools CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Impose a source PDF onto press sheets
    Impose {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Show statistics only, don't generate a PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Generate a proof with numbered placeholder frames
    Proof {
        /// Number of pages to lay out
        #[arg(short, long)]
        pages: usize,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Report the page count of a PDF file (0 if unreadable)
    Sniff {
        /// Input PDF file
        input: PathBuf,
    },

    /// Estimate spine width for a page count and paper stock
    Spine {
        /// Interior page count
        #[arg(short, long)]
        pages: usize,

        /// Paper stock
        #[arg(long, default_value = "offset80", value_enum)]
        stock: StockArg,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Product type
    #[arg(long, default_value = "saddle", value_enum)]
    imposition: ImpositionArg,

    /// Print method
    #[arg(long, default_value = "sheetwise", value_enum)]
    method: MethodArg,

    /// Pages per signature for perfect binding (multiple of 4)
    #[arg(long, default_value = "16")]
    signature_size: usize,

    /// Grid columns for N-up
    #[arg(long, default_value = "2")]
    columns: usize,

    /// Grid rows for N-up
    #[arg(long, default_value = "1")]
    rows: usize,

    /// Press sheet format
    #[arg(long, default_value = "a3", value_enum)]
    format: FormatArg,

    /// Sheet orientation
    #[arg(long, default_value = "landscape", value_enum)]
    orientation: OrientationArg,

    /// Gap between items in mm
    #[arg(long, default_value = "0.0")]
    gap: f32,

    /// Paper thickness per sheet in mm for creep compensation
    #[arg(long, default_value = "0.0")]
    creep: f32,

    /// Generate a cover page ahead of the interior sheets
    #[arg(long)]
    cover: bool,

    /// Spine thickness in mm for the cover
    #[arg(long, default_value = "5.0")]
    spine: f32,

    /// Suppress all printer's marks
    #[arg(long)]
    no_marks: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ImpositionArg {
    Saddle,
    Perfect,
    CutStack,
    Nup,
}

#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    Sheetwise,
    WorkAndTurn,
    WorkAndTumble,
    Simplex,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    A4,
    A3,
    A2,
    Sra3,
    B1,
    B2,
    B3,
    Ra1,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum StockArg {
    Offset80,
    Offset90,
    Coated115,
    Coated130,
    Coated150,
    Cream70,
    Cream80,
    MunkenCream90,
    MunkenWhite90,
    Bulky60,
}

impl From<ImpositionArg> for press_impose::ImpositionKind {
    fn from(arg: ImpositionArg) -> Self {
        match arg {
            ImpositionArg::Saddle => Self::SaddleStitch,
            ImpositionArg::Perfect => Self::PerfectBound,
            ImpositionArg::CutStack => Self::CutAndStack,
            ImpositionArg::Nup => Self::NUp,
        }
    }
}

impl From<MethodArg> for press_impose::PrintMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Sheetwise => Self::Sheetwise,
            MethodArg::WorkAndTurn => Self::WorkAndTurn,
            MethodArg::WorkAndTumble => Self::WorkAndTumble,
            MethodArg::Simplex => Self::Simplex,
        }
    }
}

impl From<FormatArg> for press_impose::SheetFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::A4 => Self::A4,
            FormatArg::A3 => Self::A3,
            FormatArg::A2 => Self::A2,
            FormatArg::Sra3 => Self::Sra3,
            FormatArg::B1 => Self::B1,
            FormatArg::B2 => Self::B2,
            FormatArg::B3 => Self::B3,
            FormatArg::Ra1 => Self::Ra1,
        }
    }
}

impl From<OrientationArg> for press_impose::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<StockArg> for PaperStock {
    fn from(arg: StockArg) -> Self {
        match arg {
            StockArg::Offset80 => Self::Offset80,
            StockArg::Offset90 => Self::Offset90,
            StockArg::Coated115 => Self::Coated115,
            StockArg::Coated130 => Self::Coated130,
            StockArg::Coated150 => Self::Coated150,
            StockArg::Cream70 => Self::Cream70,
            StockArg::Cream80 => Self::Cream80,
            StockArg::MunkenCream90 => Self::MunkenCream90,
            StockArg::MunkenWhite90 => Self::MunkenWhite90,
            StockArg::Bulky60 => Self::Bulky60,
        }
    }
}

impl From<&LayoutArgs> for press_impose::JobOptions {
    fn from(args: &LayoutArgs) -> Self {
        let marks = if args.no_marks {
            press_impose::MarkOptions {
                crop_marks: false,
                registration_marks: false,
                color_bar: false,
                collation_marks: false,
                fold_line: false,
                slug_line: false,
            }
        } else {
            press_impose::MarkOptions::default()
        };

        press_impose::JobOptions {
            imposition: args.imposition.into(),
            print_method: args.method.into(),
            signature_size: args.signature_size,
            columns: args.columns,
            rows: args.rows,
            format: args.format.into(),
            orientation: args.orientation.into(),
            gap_mm: args.gap,
            creep_per_sheet_mm: args.creep,
            cover: args
                .cover
                .then_some(press_impose::CoverOptions { spine_mm: args.spine }),
            marks,
        }
    }
}

fn print_statistics(stats: &press_impose::JobStatistics) {
    println!("Imposition statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Sheets: {}", stats.sheets);
    println!("  Printed surfaces: {}", stats.surfaces);
    println!("  Blank slots added: {}", stats.blank_slots);
    if let Some(signatures) = stats.signatures {
        println!("  Signatures: {}", signatures);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Impose {
            input,
            output,
            layout,
            stats_only,
        } => {
            let options = press_impose::JobOptions::from(&layout);

            let source = press_impose::load_pdf(&input).await?;
            let total_pages = source.get_pages().len();
            if total_pages == 0 {
                println!("No pages in {} - nothing to impose", input.display());
                return Ok(());
            }

            let stats = press_impose::calculate_statistics(total_pages, &options);
            print_statistics(&stats);

            if stats_only {
                return Ok(());
            }

            let imposed = press_impose::impose(&source, &options).await?;
            press_impose::save_pdf(imposed, &output).await?;
            println!("Imposed → {}", output.display());
        }

        Commands::Proof {
            pages,
            output,
            layout,
        } => {
            let options = press_impose::JobOptions::from(&layout);

            let stats = press_impose::calculate_statistics(pages, &options);
            print_statistics(&stats);

            let proof = press_impose::impose_proof(pages, &options).await?;
            press_impose::save_pdf(proof, &output).await?;
            println!("Proof → {}", output.display());
        }

        Commands::Sniff { input } => {
            let pages = press_impose::sniff_page_count_file(&input).await;
            println!("{}", pages);
        }

        Commands::Spine { pages, stock } => {
            let width = spine_width_mm(pages, stock.into());
            println!("{:.2} mm", width);
        }
    }

    Ok(())
}

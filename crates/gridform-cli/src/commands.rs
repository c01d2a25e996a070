use anyhow::{Context, Result};
use comfy_table::Table;

use gridform_cli::pipeline::{apply_table_style, render_preview, run_reshape};
use gridform_engine::ReshapeOp;
use gridform_ingest::read_csv_table;

use crate::cli::{ApplyArgs, OpArg, ShowArgs};

const PREVIEW_LIMIT: usize = 20;

pub fn run_apply(args: &ApplyArgs) -> Result<()> {
    let op = reshape_op(args.op);
    let outcome = run_reshape(&args.input, op, args.output.as_deref())?;
    println!("Operation: {}", op.name());
    println!("Input: {}", args.input.display());
    println!("Output: {}", outcome.output_path.display());
    println!("Rows: {} -> {}", outcome.input_rows, outcome.output_rows);
    if args.preview {
        println!("{}", render_preview(&outcome.table, PREVIEW_LIMIT));
    }
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let table = read_csv_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    println!(
        "{}: {} columns, {} rows",
        args.input.display(),
        table.column_count(),
        table.row_count()
    );
    println!("{}", render_preview(&table, args.limit));
    if table.row_count() > args.limit {
        println!("... {} more rows", table.row_count() - args.limit);
    }
    Ok(())
}

pub fn run_ops() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Operation", "Description"]);
    apply_table_style(&mut table);
    for op in ReshapeOp::ALL {
        table.add_row(vec![op.name(), op.description()]);
    }
    println!("{table}");
    Ok(())
}

fn reshape_op(arg: OpArg) -> ReshapeOp {
    match arg {
        OpArg::Expand => ReshapeOp::Expand,
        OpArg::Collapse => ReshapeOp::Collapse,
        OpArg::FlattenNames => ReshapeOp::FlattenNames,
        OpArg::FlattenCodes => ReshapeOp::FlattenWithCodes,
    }
}

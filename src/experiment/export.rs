use std::error::Error;
use super::Context;
use super::super::io;

/// Copies the first `export.limit` records of the data file into
/// `export.output`, re-delimited with `export.delimiter`.
pub fn run(ctx: &Context) -> Result<(), Box<dyn Error>> {

    let n = export(ctx)?;
    println!("wrote {} records to {}", n, ctx.export.output);

    Ok(())
}

pub fn export(ctx: &Context) -> Result<usize, Box<dyn Error>> {

    if let Some(url) = &ctx.data.url {
        io::download_if_not_present(url, &ctx.data.path)?;
    }

    let (header, rows) = io::read_records(&ctx.data.path, ctx.data.read.delimiter, ctx.data.read.has_headers, ctx.export.limit)?;
    tracing::debug!("read {} records from {}", rows.len(), ctx.data.path);

    io::write_delimited(&ctx.export.output, header.as_deref(), &rows, ctx.export.delimiter)?;

    Ok(rows.len())
}

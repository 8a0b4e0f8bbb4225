use anyhow::Result;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, ContentArrangement, Table};
use std::io::Write;

use crate::core::VendorIdentity;
use crate::formatting::FormattingConfig;

pub fn list_vendors(plain: bool) -> Result<()> {
    let formatting = FormattingConfig::resolve(None, plain);
    formatting.apply();
    let stdout = std::io::stdout();
    write_vendor_table(&mut stdout.lock(), &formatting)
}

pub fn write_vendor_table<W: Write>(out: &mut W, formatting: &FormattingConfig) -> Result<()> {
    let mut table = Table::new();
    if formatting.is_plain() {
        table.load_preset(ASCII_FULL).force_no_tty();
    } else {
        table.load_preset(UTF8_FULL);
    }
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Slug"),
            Cell::new("Vendor"),
            Cell::new("Deployment"),
            Cell::new("Cost model"),
        ]);

    for vendor in VendorIdentity::ALL {
        table.add_row(vec![
            Cell::new(vendor.slug()),
            Cell::new(vendor.display_name()),
            Cell::new(vendor.deployment()),
            Cell::new(vendor.cost_model()),
        ]);
    }

    writeln!(out, "{table}")?;
    writeln!(
        out,
        "{}",
        formatting.dim("Unknown vendor names are priced with the generic hybrid model.")
    )?;
    Ok(())
}

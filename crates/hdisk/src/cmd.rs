//! Command handlers for the `hdisk` CLI.
//!
//! Each handler generates the curve through the library entry points and
//! writes its result either to a stream or to files on disk.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use hilbertdisk::{Mapping, generate_normalized_curve, registry};
use log::{debug, info};

use crate::svg::{SvgOptions, render_svg, slug};

/// Write the normalized curve of `order`, optionally mapped, as `x y` lines.
///
/// Returns the number of points written.
pub fn points(order: i64, mapping: Option<Mapping>, out: &mut impl Write) -> Result<usize> {
    let curve = generate_normalized_curve(order)?;
    let curve = match mapping {
        Some(m) => {
            debug!("applying {m} to {} points", curve.len());
            m.apply_all(&curve)
        }
        None => curve,
    };
    for p in &curve {
        writeln!(out, "{} {}", p.x, p.y)?;
    }
    out.flush()?;
    Ok(curve.len())
}

/// Parameters for an SVG export.
pub struct SvgExport<'a> {
    /// Curve order.
    pub order: i64,
    /// Mappings to export next to the original curve.
    pub mappings: &'a [Mapping],
    /// Directory receiving the files; created when missing.
    pub outdir: &'a Path,
    /// Stroke and canvas styling.
    pub options: SvgOptions,
}

/// File name for an exported curve.
fn export_name(label: &str, order: i64) -> String {
    format!("{label}_order_{order}.svg")
}

/// Write the original curve and one file per selected mapping.
///
/// Files are named `original_order_<k>.svg` and `<slug>_order_<k>.svg`.
/// Returns the written paths in order.
pub fn svg(export: &SvgExport<'_>) -> Result<Vec<PathBuf>> {
    let SvgExport {
        order,
        mappings,
        outdir,
        options,
    } = export;

    let curve = generate_normalized_curve(*order)?;
    fs::create_dir_all(outdir)
        .with_context(|| format!("creating output directory {}", outdir.display()))?;

    let mut written = Vec::with_capacity(mappings.len() + 1);
    let mut save = |name: String, body: String| -> Result<()> {
        let path = outdir.join(name);
        fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
        written.push(path);
        Ok(())
    };

    save(export_name("original", *order), render_svg(&curve, options))?;

    let mut seen: Vec<Mapping> = Vec::with_capacity(mappings.len());
    for &m in mappings.iter() {
        if seen.contains(&m) {
            debug!("skipping repeated mapping {m}");
            continue;
        }
        seen.push(m);
        let mapped = m.apply_all(&curve);
        save(
            export_name(&slug(m.name()), *order),
            render_svg(&mapped, options),
        )?;
    }

    Ok(written)
}

/// Print every registered mapping with its description.
pub fn list_mappings(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Supported mappings (name — description):")?;
    for entry in &registry::REGISTRY {
        writeln!(out, "- {} — {}", entry.name, entry.info)?;
    }
    Ok(())
}

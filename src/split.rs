use std::path::{Path, PathBuf};

use image::GenericImageView as _;

use crate::geometry::Layout;

#[derive(Debug, thiserror::Error)]
pub(crate) enum SplitError {
    #[error("failed to decode sheet {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("output directory {} does not exist", .0.display())]
    OutputDir(PathBuf),
    #[error("failed to save cell ({row}, {col}) to {}: {source}", .path.display())]
    Save {
        row: u32,
        col: u32,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Cuts the sheet at `sheet_path` into cells of `layout` and saves each one
/// to `out_dir` as `img_{row}_{col}.png`, overwriting files of the same
/// name. The directory must already exist. Returns the number of cells
/// written.
///
/// The run is a single pass with no retry: the first failing save aborts it,
/// leaving the cells written so far on disk and naming the failed one in the
/// error.
pub(crate) fn split(
    sheet_path: &Path,
    out_dir: &Path,
    layout: Layout,
) -> Result<usize, SplitError> {
    let sheet = image::open(sheet_path).map_err(|source| SplitError::Decode {
        path: sheet_path.to_owned(),
        source,
    })?;

    if !out_dir.is_dir() {
        return Err(SplitError::OutputDir(out_dir.to_owned()));
    }

    let (sheet_width, sheet_height) = sheet.dimensions();
    let grid = layout.grid_size(sheet_width, sheet_height);
    log::info!(
        "sheet is {}x{} px, grid is {} rows x {} cols",
        sheet_width,
        sheet_height,
        grid.rows,
        grid.cols
    );

    let mut written = 0;
    for cell in layout.cells(sheet_width, sheet_height) {
        let rect = cell.rect;
        let path = out_dir.join(format!("img_{}_{}.png", cell.row, cell.col));
        log::debug!(
            "cell ({}, {}) from ({}, {}) -> {}",
            cell.row,
            cell.col,
            rect.x,
            rect.y,
            path.display()
        );

        sheet
            .crop_imm(rect.x, rect.y, rect.width, rect.height)
            .save(&path)
            .map_err(|source| SplitError::Save {
                row: cell.row,
                col: cell.col,
                path,
                source,
            })?;
        written += 1;
    }

    debug_assert_eq!(written, grid.cell_count());
    Ok(written)
}

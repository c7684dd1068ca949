use crate::layout::compute_sheets;
use crate::options::JobOptions;
use crate::types::*;

/// Calculate statistics for an imposition job.
///
/// Runs the same pure calculation the renderer consumes and counts the
/// result, so the numbers can never disagree with the actual output.
/// Zero pages yield all-zero statistics.
pub fn calculate_statistics(total_pages: usize, options: &JobOptions) -> JobStatistics {
    let sheets = compute_sheets(
        options.imposition,
        options.print_method,
        total_pages,
        &options.layout_params(),
    );

    let surfaces = sheets
        .iter()
        .map(|s| if s.is_two_sided() { 2 } else { 1 })
        .sum();

    let blank_slots = sheets
        .iter()
        .flat_map(|s| s.front.iter().chain(s.back.iter()))
        .filter(|item| item.page.is_blank())
        .count();

    let signatures = match options.imposition {
        ImpositionKind::SaddleStitch | ImpositionKind::PerfectBound => {
            sheets.first().map(|s| s.total_signatures)
        }
        ImpositionKind::CutAndStack | ImpositionKind::NUp => None,
    };

    JobStatistics {
        source_pages: total_pages,
        sheets: sheets.len(),
        surfaces,
        blank_slots,
        signatures,
    }
}

pub use indicatif::ProgressBar;
pub use indicatif::ProgressStyle;

/// Progress bar counting scanned sequences.
pub fn sequences(count: usize) -> ProgressBar {
    let template = "  {wide_bar} {pos}/{len} sequences [{elapsed} elapsed; {eta} left]";

    let progress = ProgressBar::new(count as u64);
    progress.set_draw_delta(u64::max(1, count as u64 / 1000));
    progress.set_style(ProgressStyle::default_bar().template(template));

    progress
}

/// UI components module
///
/// Widgets for the media grids shown on the main page.

pub mod grid;

use iced::widget::{column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::state::data::{MediaFile, MediaKind};
use crate::Message;

/// Edge length of a square image tile
const TILE_SIZE: f32 = 180.0;

/// Width of an audio card
const CARD_WIDTH: f32 = 240.0;

/// Lay out media files as a wrapping grid.
///
/// Audio files become cards with an icon badge, filename, and size;
/// images become square thumbnail tiles.
pub fn media_grid<'a>(
    files: &'a [MediaFile],
    kind: MediaKind,
    thumbnails: &HashMap<PathBuf, PathBuf>,
) -> Element<'a, Message> {
    let cells: Vec<Element<'a, Message>> = files
        .iter()
        .map(|file| match kind {
            MediaKind::Audio => audio_card(file),
            MediaKind::Image => image_tile(file, thumbnails.get(&file.path)),
        })
        .collect();

    Wrap::with_elements(cells)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

/// A card for one audio file: icon badge, name, size in MB
fn audio_card(file: &MediaFile) -> Element<'_, Message> {
    let badge = container(text("♪").size(20))
        .center(Length::Fixed(48.0))
        .style(container::rounded_box);

    let details = column![
        text(&file.name).size(14),
        text(format!("{:.2} MB", file.size_mb())).size(12),
    ]
    .spacing(4);

    container(row![badge, details].spacing(12).align_y(Alignment::Center))
        .padding(12)
        .width(Length::Fixed(CARD_WIDTH))
        .style(container::rounded_box)
        .into()
}

/// A square tile for one image file
fn image_tile<'a>(file: &'a MediaFile, thumbnail: Option<&PathBuf>) -> Element<'a, Message> {
    match thumbnail {
        Some(thumb) => image(image::Handle::from_path(thumb))
            .width(Length::Fixed(TILE_SIZE))
            .height(Length::Fixed(TILE_SIZE))
            .content_fit(ContentFit::Cover)
            .into(),
        // Thumbnail still generating (or failed to decode): show the name
        None => container(text(&file.name).size(12))
            .center(Length::Fixed(TILE_SIZE))
            .style(container::rounded_box)
            .into(),
    }
}

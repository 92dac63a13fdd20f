use iced::{Element, Task, Theme};
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Length};
use rfd::FileDialog;
use std::collections::HashMap;
use std::path::PathBuf;

// Declare the application modules
mod media;
mod scan;
mod state;
mod ui;

use state::data::{MediaKind, ScanResult};
use state::store::MediaStore;

/// Main application state
struct MediaBrowser {
    /// Results of the most recent scan, as shown in the grids
    store: MediaStore,
    /// Generated thumbnails, keyed by source image path
    thumbnails: HashMap<PathBuf, PathBuf>,
    /// Status message to display to the user
    status: String,
    /// Whether a scan is currently in flight
    is_scanning: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Select Media Folder" button
    SelectFolder,
    /// Background scan completed with results
    ScanComplete(ScanResult),
    /// Background thumbnail generation finished
    ThumbnailsReady(Vec<(PathBuf, PathBuf)>),
}

impl MediaBrowser {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let browser = MediaBrowser {
            store: MediaStore::new(),
            thumbnails: HashMap::new(),
            status: String::from("Ready. Select a folder to scan for media."),
            is_scanning: false,
        };

        (browser, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectFolder => {
                // The button is disabled while scanning, but a queued press
                // could still land here
                if self.is_scanning {
                    return Task::none();
                }

                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Media Folder")
                    .pick_folder();

                self.is_scanning = true;

                match folder {
                    Some(folder_path) => {
                        self.status = format!("Scanning {}...", folder_path.display());

                        Task::perform(scan::scan_folder(folder_path), Message::ScanComplete)
                    }
                    // A cancelled dialog counts as a scan that found nothing,
                    // so previous results are still replaced
                    None => Task::done(Message::ScanComplete(ScanResult::default())),
                }
            }
            Message::ScanComplete(result) => {
                self.is_scanning = false;

                if result.is_empty() {
                    // Indistinguishable from a failed scan, on purpose
                    self.status = String::from("No media files found");
                } else {
                    self.status = format!(
                        "Found {} audio files and {} images.",
                        result.audio.len(),
                        result.images.len()
                    );
                }

                self.thumbnails.clear();
                self.store.set_local_media(result);

                let images = self.store.local_images().to_vec();
                if images.is_empty() {
                    return Task::none();
                }

                // Generate thumbnails for the image grid in the background
                Task::perform(
                    media::thumbnail::generate_all(images),
                    Message::ThumbnailsReady,
                )
            }
            Message::ThumbnailsReady(pairs) => {
                self.thumbnails.extend(pairs);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let scan_button = if self.is_scanning {
            button("Scanning...").padding(10)
        } else {
            button("Select Media Folder")
                .on_press(Message::SelectFolder)
                .padding(10)
        };

        let mut content = column![
            text("Personal Media Player").size(40),
            scan_button,
            text(&self.status).size(16),
        ]
        .spacing(20)
        .align_x(Alignment::Center);

        if !self.store.local_audio().is_empty() {
            content = content
                .push(section_header(
                    "Your Music",
                    format!("{} files", self.store.local_audio().len()),
                ))
                .push(ui::grid::media_grid(
                    self.store.local_audio(),
                    MediaKind::Audio,
                    &self.thumbnails,
                ));
        }

        if !self.store.local_images().is_empty() {
            content = content
                .push(section_header(
                    "Your Images",
                    format!("{} images", self.store.local_images().len()),
                ))
                .push(ui::grid::media_grid(
                    self.store.local_images(),
                    MediaKind::Image,
                    &self.thumbnails,
                ));
        }

        if self.store.is_empty() && !self.is_scanning {
            content = content.push(
                column![
                    text("No files selected yet").size(18),
                    text("Click \"Select Media Folder\" to get started").size(14),
                ]
                .spacing(8)
                .align_x(Alignment::Center),
            );
        }

        scrollable(
            container(content)
                .width(Length::Fill)
                .padding(40)
                .center_x(Length::Fill),
        )
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// A section title with a count on the right, above each grid
fn section_header(title: &str, count: String) -> Element<'_, Message> {
    row![
        text(title).size(28).width(Length::Fill),
        text(count).size(16),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .into()
}

fn main() -> iced::Result {
    iced::application(
        "Media Browser",
        MediaBrowser::update,
        MediaBrowser::view,
    )
    .theme(MediaBrowser::theme)
    .centered()
    .run_with(MediaBrowser::new)
}

/// Media handling module
///
/// This module handles:
/// - Generating thumbnails for discovered images
/// - Caching thumbnails to disk so rescans stay fast

pub mod thumbnail;

//! Compiled-in file format signatures.
//!
//! Order matters: scan results for the static partitions are reported in the
//! order entries appear here. Several compound-document formats share one
//! header pattern on purpose, so a match on it reports every one of them.

use super::SignatureDef;

/// Number of builtin signatures
pub const COUNT: usize = 38;

static SIGNATURES: [SignatureDef; COUNT] = [
    SignatureDef::from_static("DOC Header", &[0xd0, 0xcf, 0x11, 0xe0, 0xa1, 0xb1, 0x1a, 0xe1]),
    SignatureDef::from_static(
        "DOC Footer",
        &[0x57, 0x6f, 0x72, 0x64, 0x2e, 0x44, 0x6f, 0x63, 0x75, 0x6d, 0x65, 0x6e, 0x74, 0x2e],
    ),
    SignatureDef::from_static("XLS Header", &[0xd0, 0xcf, 0x11, 0xe0, 0xa1, 0xb1, 0x1a, 0xe1]),
    SignatureDef::from_static(
        "XLS Footer",
        &[
            0xfe, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x57, 0x00,
            0x6f, 0x00, 0x72, 0x00, 0x6b, 0x00, 0x62, 0x00, 0x6f, 0x00, 0x6f, 0x00, 0x6b, 0x00,
        ],
    ),
    SignatureDef::from_static("PPT Header", &[0xd0, 0xcf, 0x11, 0xe0, 0xa1, 0xb1, 0x1a, 0xe1]),
    SignatureDef::from_static("PPT Footer", &[0xa0, 0x46, 0x1d, 0xf0]),
    SignatureDef::from_static("ZIP Header", &[0x50, 0x4b, 0x03, 0x04, 0x14]),
    SignatureDef::from_static("ZIP Footer", &[0x50, 0x4b, 0x05, 0x06, 0x00]),
    SignatureDef::from_static(
        "ZIPLock Footer",
        &[0x50, 0x4b, 0x03, 0x04, 0x14, 0x00, 0x01, 0x00, 0x63, 0x00, 0x00, 0x00, 0x00, 0x00],
    ),
    SignatureDef::from_static(
        "JPG Header",
        &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, 0x4a, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01],
    ),
    SignatureDef::from_static("GIF Header", &[0x47, 0x49, 0x46, 0x38, 0x39, 0x61]),
    SignatureDef::from_static("GIF Footer", &[0x21, 0x00, 0x00, 0x3b, 0x00]),
    SignatureDef::from_static("PDF Header", &[0x25, 0x50, 0x44, 0x46]),
    SignatureDef::from_static("PDF Header (alternate)", &[0x26, 0x23, 0x32, 0x30, 0x35]),
    SignatureDef::from_static("PDF Footer", &[0x25, 0x25, 0x45, 0x4f, 0x46]),
    SignatureDef::from_static("Torrent Header", &[0x61, 0x6e, 0x6e, 0x6f, 0x75, 0x6e, 0x63, 0x65]),
    SignatureDef::from_static("GZ Header", &[0x1f, 0x8b, 0x08, 0x08]),
    SignatureDef::from_static("TAR Header", &[0x1f, 0x8b, 0x08, 0x00]),
    SignatureDef::from_static("TAR.GZ Header", &[0x1f, 0x9d, 0x90, 0x70]),
    SignatureDef::from_static("EPUB Header", &[0x50, 0x4b, 0x03, 0x04, 0x0a, 0x00, 0x02, 0x00]),
    SignatureDef::from_static("PNG Header", &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a]),
    SignatureDef::from_static("8192 Header", &[0x6d, 0x51, 0x51, 0x4e, 0x42]),
    SignatureDef::from_static("4096 Header", &[0x6d, 0x51, 0x49, 0x4e, 0x42, 0x46, 0x67, 0x2f]),
    SignatureDef::from_static("2048 Header", &[0x95, 0x2e, 0x3e, 0x2e, 0x58, 0x4b, 0x7a]),
    SignatureDef::from_static("Secret Header", &[0x52, 0x61, 0x72, 0x21, 0x1a, 0x07, 0x00]),
    SignatureDef::from_static("RAR Header", &[0x6d, 0x51, 0x45, 0x4e, 0x42, 0x46, 0x67]),
    SignatureDef::from_static("OGG Header", &[0x4f, 0x67, 0x67, 0x53]),
    SignatureDef::from_static("WAV Header", &[0x42, 0x49, 0x46, 0x46]),
    SignatureDef::from_static("WAV Header (alternate)", &[0x57, 0x41, 0x56, 0x45]),
    SignatureDef::from_static("AVI Header", &[0x42, 0x49, 0x46, 0x46]),
    SignatureDef::from_static("AVI Header (alternate)", &[0x41, 0x56, 0x49, 0x20]),
    SignatureDef::from_static("MIDI Header", &[0x4d, 0x54, 0x68, 0x64]),
    SignatureDef::from_static("7z Header", &[0x37, 0x7a, 0xbc, 0xaf, 0x27, 0x1c]),
    SignatureDef::from_static("7z Footer", &[0x00, 0x00, 0x00, 0x17, 0x06]),
    SignatureDef::from_static("DMG Header", &[0x78, 0x01, 0x73, 0x0d, 0x62, 0x62, 0x60]),
    SignatureDef::from_static("Wikileaks", &[0x57, 0x69, 0x6b, 0x69, 0x6c, 0x65, 0x61, 0x6b, 0x73]),
    SignatureDef::from_static(
        "Julian Assange",
        &[0x4a, 0x75, 0x6c, 0x69, 0x61, 0x6e, 0x20, 0x41, 0x73, 0x73, 0x61, 0x6e, 0x67, 0x65],
    ),
    SignatureDef::from_static("Mendax", &[0x4d, 0x65, 0x6e, 0x64, 0x61, 0x07]),
];

/// Returns the builtin signature table in its fixed order
pub fn signatures() -> &'static [SignatureDef] {
    &SIGNATURES
}

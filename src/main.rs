use crate::app::FileTreeApp;

// Import modules for this application

// The application struct itself
mod app;
// The filesystem utilities and structures
mod fs_utils;
// The UI rendering code which gets attached to the FileTreeApp
mod ui;

/// The Entrypoint of the application. Opens a window containing a tree view
/// of the file system rooted at a fixed path, then runs the event loop until
/// the window is closed. The process exits with the event loop's own result.
fn main() -> iced::Result {
    env_logger::init();

    iced::application(FileTreeApp::default, FileTreeApp::update, FileTreeApp::view)
        .title("File System Tree")
        .theme(FileTreeApp::theme)
        .run()
}

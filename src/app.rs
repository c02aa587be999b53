use iced::Task;

use crate::fs_utils::{self, FileNode, ROOT_PATH};
use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
};

/// The application state
#[derive(Debug)]
pub struct FileTreeApp {
    /// The fixed path the tree is rooted at
    pub root: PathBuf,
    /// The loaded children of each directory, keyed by directory path
    pub children: HashMap<PathBuf, Vec<FileNode>>,
    /// The directories currently expanded in the tree
    pub expanded: HashSet<PathBuf>,
    /// The currently selected row (if any)
    pub selected: Option<PathBuf>,
    /// Whether the application is in dark mode
    pub system_color_mode: dark_light::Mode,
}

/// The actions that can occur for the application. The `update` function
/// applies the state change for each action and returns the follow-up task
/// (if any) for the runtime to execute.
#[derive(Debug, Clone)]
pub enum Action {
    // An action for when a directory row is clicked in the tree
    Toggle(PathBuf),
    // An action for when a file row is clicked in the tree
    Select(PathBuf),
    // Delivers the children of a directory once a lazy load finishes
    DirectoryLoaded(PathBuf, Vec<FileNode>),
}

/// The default methods
impl Default for FileTreeApp {
    fn default() -> Self {
        let root = PathBuf::from(ROOT_PATH);

        // Read the first level of the root to build the initial tree.
        // An unreadable root still opens the window, just with nothing in it.
        let nodes = match fs_utils::read_dir(&root) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::error!("could not read root {}: {}", root.display(), e);
                Vec::new()
            }
        };

        let system_color_mode = match dark_light::detect() {
            Ok(mode) => mode,
            Err(_) => dark_light::Mode::Light,
        };

        log::info!("detected system color mode: {:?}", system_color_mode);

        let mut children = HashMap::new();
        children.insert(root.clone(), nodes);

        FileTreeApp {
            root,
            children,
            expanded: HashSet::new(),
            selected: None,
            system_color_mode,
        }
    }
}

/// The methods of the FileTreeApp
impl FileTreeApp {
    /// Applies the action that took place during the last frame
    ///
    /// # Arguments
    ///
    /// * `self` - the application instance
    /// * `action` - the [`Action`] that occurred
    pub fn update(&mut self, action: Action) -> Task<Action> {
        match action {
            // Runs when a directory row in the tree is clicked
            Action::Toggle(path) => {
                self.selected = Some(path.clone());

                if self.expanded.remove(&path) {
                    return Task::none();
                }

                self.expanded.insert(path.clone());

                // Children stay loaded across collapse/expand, so only the
                // first expansion hits the disk
                if self.children.contains_key(&path) {
                    return Task::none();
                }

                log::debug!("loading {}", path.display());

                let load_path = path.clone();

                // List the directory off the UI thread and hand the result
                // back as an action
                Task::perform(
                    async move { tokio::task::spawn_blocking(move || fs_utils::read_dir(&load_path)).await },
                    move |joined| {
                        let nodes = match joined {
                            Ok(Ok(nodes)) => nodes,
                            Ok(Err(e)) => {
                                log::error!("could not list {}: {}", path.display(), e);
                                Vec::new()
                            }
                            Err(e) => {
                                log::error!("directory listing task failed: {}", e);
                                Vec::new()
                            }
                        };

                        Action::DirectoryLoaded(path.clone(), nodes)
                    },
                )
            }
            // Runs when a file row in the tree is clicked
            Action::Select(path) => {
                self.selected = Some(path);
                Task::none()
            }
            // Runs when a lazy directory load finishes
            Action::DirectoryLoaded(path, nodes) => {
                self.children.insert(path, nodes);
                Task::none()
            }
        }
    }

    /// Flattens the tree into render order: the rows of each expanded
    /// directory follow it immediately, one level deeper.
    pub fn visible_rows(&self) -> Vec<(usize, &FileNode)> {
        let mut rows = Vec::new();
        self.collect_rows(&self.root, 0, &mut rows);
        rows
    }

    fn collect_rows<'a>(&'a self, dir: &Path, depth: usize, rows: &mut Vec<(usize, &'a FileNode)>) {
        let Some(children) = self.children.get(dir) else {
            return;
        };

        for node in children {
            rows.push((depth, node));

            if node.is_dir && self.expanded.contains(&node.path) {
                self.collect_rows(&node.path, depth + 1, rows);
            }
        }
    }
}

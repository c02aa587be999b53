use crate::app::{Action, FileTreeApp};
use crate::fs_utils::FileNode;

use chrono::{DateTime, Local};
use humansize::{DECIMAL, format_size};
use iced::{
    Background, Color, Font, Length,
    font::Weight,
    widget::{button, column, container, row, scrollable, space, text},
};

const HEADING_FONT_SIZE: f32 = 20.0;
const ROW_FONT_SIZE: f32 = 16.0;
const INDENT_WIDTH: f32 = 18.0;
const ARROW_WIDTH: f32 = 18.0;

// Relative column widths, matching the usual Name / Size / Type / Date
// Modified layout of a file manager tree
const NAME_PORTION: u16 = 5;
const SIZE_PORTION: u16 = 1;
const TYPE_PORTION: u16 = 2;
const MODIFIED_PORTION: u16 = 2;

/// The rendering methods of the FileTreeApp
impl FileTreeApp {
    /// Maps the detected system color mode to the toolkit theme
    pub fn theme(&self) -> iced::Theme {
        match self.system_color_mode {
            dark_light::Mode::Dark => iced::Theme::Dark,
            dark_light::Mode::Light | dark_light::Mode::Unspecified => iced::Theme::Light,
        }
    }

    /// Builds the window content: a heading with the root path, the column
    /// header, and the scrollable tree rows.
    pub fn view(&self) -> iced::Element<'_, Action> {
        let selected_row_theme = |selected: bool| {
            move |theme: &iced::Theme, status: button::Status| {
                // Get the base theme color
                let palette = theme.extended_palette();
                // If the row is selected, use the primary button style
                if selected {
                    button::primary(theme, status)
                } else {
                    match status {
                        // Normal state - no background and default text
                        button::Status::Active | button::Status::Pressed => button::Style {
                            background: Some(Background::Color(palette.background.base.color)),
                            text_color: Color::from_rgb(
                                palette.background.base.text.r,
                                palette.background.base.text.g,
                                palette.background.base.text.b,
                            ),
                            ..button::Style::default()
                        },
                        // Hovered and disabled states use the primary style
                        button::Status::Hovered => button::primary(theme, status),
                        button::Status::Disabled => button::primary(theme, status),
                    }
                }
            }
        };

        let mut tree_rows: Vec<iced::Element<Action>> = Vec::new();

        for (depth, node) in self.visible_rows() {
            let arrow = if !node.is_dir {
                ""
            } else if self.expanded.contains(&node.path) {
                "▾"
            } else {
                "▸"
            };

            let name_cell = row![
                space::horizontal().width(Length::Fixed(depth as f32 * INDENT_WIDTH)),
                text(arrow)
                    .shaping(text::Shaping::Advanced)
                    .size(ROW_FONT_SIZE)
                    .width(Length::Fixed(ARROW_WIDTH)),
                text(node.display_name())
                    .shaping(text::Shaping::Advanced)
                    .size(ROW_FONT_SIZE),
            ];

            let action = if node.is_dir {
                Action::Toggle(node.path.clone())
            } else {
                Action::Select(node.path.clone())
            };

            let is_selected = self.selected.as_deref() == Some(node.path.as_path());

            tree_rows.push(
                button(row![
                    name_cell.width(Length::FillPortion(NAME_PORTION)),
                    text(size_label(node))
                        .size(ROW_FONT_SIZE)
                        .width(Length::FillPortion(SIZE_PORTION)),
                    text(node.type_label())
                        .size(ROW_FONT_SIZE)
                        .width(Length::FillPortion(TYPE_PORTION)),
                    text(modified_label(node))
                        .size(ROW_FONT_SIZE)
                        .width(Length::FillPortion(MODIFIED_PORTION)),
                ])
                .style(selected_row_theme(is_selected))
                .on_press(action)
                .width(Length::Fill)
                .into(),
            );
        }

        let bold = Font {
            weight: Weight::Bold,
            ..Font::default()
        };

        let header = row![
            text("Name")
                .size(ROW_FONT_SIZE)
                .font(bold)
                .width(Length::FillPortion(NAME_PORTION)),
            text("Size")
                .size(ROW_FONT_SIZE)
                .font(bold)
                .width(Length::FillPortion(SIZE_PORTION)),
            text("Type")
                .size(ROW_FONT_SIZE)
                .font(bold)
                .width(Length::FillPortion(TYPE_PORTION)),
            text("Date Modified")
                .size(ROW_FONT_SIZE)
                .font(bold)
                .width(Length::FillPortion(MODIFIED_PORTION)),
        ];

        column![
            text(self.root.display().to_string())
                .size(HEADING_FONT_SIZE)
                .font(bold),
            container(header).padding(5.0),
            scrollable(iced::widget::Column::from_vec(tree_rows).width(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .spacing(5.0)
        .padding(10.0)
        .into()
    }
}

/// The text for the "Size" column. Folders leave the cell blank.
fn size_label(node: &FileNode) -> String {
    if node.is_dir {
        String::new()
    } else {
        format_size(node.size, DECIMAL)
    }
}

/// The text for the "Date Modified" column
fn modified_label(node: &FileNode) -> String {
    match node.modified {
        Some(modified) => DateTime::<Local>::from(modified).format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}

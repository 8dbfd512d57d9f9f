//! Terminal rendition of the tray

use std::{
    io::{self, Write},
    path::PathBuf,
};

use tracing::debug;

use super::{IconState, Menu, MenuSlot, TrayPresenter};

/// Tray drawn on a text sink: the title is rewritten in place, the menu is
/// printed below whenever a counter label changes.
pub struct ConsoleTray<W: Write> {
    out: W,
    menu: Menu,
    icon: IconState,
    assets: Option<PathBuf>,
    render_menu: bool,
}

impl ConsoleTray<io::Stdout> {
    /// Tray writing to standard output
    pub fn stdout(assets: Option<PathBuf>, render_menu: bool) -> Self {
        Self::new(io::stdout(), assets, render_menu)
    }
}

impl<W: Write> ConsoleTray<W> {
    pub fn new(out: W, assets: Option<PathBuf>, render_menu: bool) -> Self {
        Self {
            out,
            menu: Menu::new(),
            icon: IconState::Default,
            assets,
            render_menu,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn icon(&self) -> IconState {
        self.icon
    }

    /// Print the full menu block
    pub fn render_menu(&mut self) -> Result<(), String> {
        write!(self.out, "\n{}", self.menu)
            .and_then(|_| self.out.flush())
            .map_err(|e| format!("Failed to render tray menu: {}", e))
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn glyph(&self) -> &'static str {
        match self.icon {
            IconState::Default => "o",
            IconState::InProgress => "*",
        }
    }
}

impl<W: Write> TrayPresenter for ConsoleTray<W> {
    fn set_icon(&mut self, icon: IconState) -> Result<(), String> {
        self.icon = icon;

        if let Some(dir) = &self.assets {
            let path = dir.join(icon.file_name());
            if !path.is_file() {
                return Err(format!("Tray icon not found: {}", path.display()));
            }
            debug!("Tray icon set to {}", path.display());
        }
        Ok(())
    }

    fn set_title(&mut self, text: &str) -> Result<(), String> {
        let glyph = self.glyph();
        write!(self.out, "\r{} {}", glyph, text)
            .and_then(|_| self.out.flush())
            .map_err(|e| format!("Failed to write tray title: {}", e))
    }

    fn set_menu_label(&mut self, slot: MenuSlot, text: &str) -> Result<(), String> {
        if self.menu.label(slot) == text {
            return Ok(());
        }
        self.menu.set_label(slot, text);
        if self.render_menu {
            self.render_menu()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(tray: ConsoleTray<Vec<u8>>) -> String {
        String::from_utf8(tray.into_inner()).unwrap()
    }

    #[test]
    fn title_uses_icon_glyph() {
        let mut tray = ConsoleTray::new(Vec::new(), None, true);
        tray.set_title("00:00").unwrap();
        tray.set_icon(IconState::InProgress).unwrap();
        tray.set_title("29:59").unwrap();
        assert_eq!(output(tray), "\ro 00:00\r* 29:59");
    }

    #[test]
    fn label_change_renders_menu() {
        let mut tray = ConsoleTray::new(Vec::new(), None, true);
        tray.set_menu_label(MenuSlot::Finished, "Finished: 1").unwrap();
        assert_eq!(tray.menu().label(MenuSlot::Finished), "Finished: 1");
        let text = output(tray);
        assert!(text.contains("    Finished: 1\n"));
        assert!(text.contains("[3] Record Distraction\n"));
    }

    #[test]
    fn unchanged_label_is_not_rerendered() {
        let mut tray = ConsoleTray::new(Vec::new(), None, true);
        tray.set_menu_label(MenuSlot::Finished, "Finished: 0").unwrap();
        assert!(output(tray).is_empty());
    }

    #[test]
    fn label_change_without_menu_rendering() {
        let mut tray = ConsoleTray::new(Vec::new(), None, false);
        tray.set_menu_label(MenuSlot::Breaks, "Breaks: 2").unwrap();
        assert_eq!(tray.menu().label(MenuSlot::Breaks), "Breaks: 2");
        assert!(output(tray).is_empty());
    }

    #[test]
    fn missing_icon_asset_is_reported_but_applied() {
        let dir = std::env::temp_dir().join("focus-tray-missing-icons");
        let mut tray = ConsoleTray::new(Vec::new(), Some(dir), true);
        let err = tray.set_icon(IconState::InProgress).unwrap_err();
        assert!(err.contains("in-progress.png"));
        assert_eq!(tray.icon(), IconState::InProgress);
    }
}

use super::OverlayApp;
use tray_icon::menu::{Menu, MenuEvent, MenuId, MenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const TRAY_ICON_PNG: &[u8] = include_bytes!("../../../assets/icons/days-left.png");
const EMPTY_ICON_SIZE: u32 = 16;

/// Decode an RGBA PNG into `(rgba, width, height)`.
fn decode_png_rgba(bytes: &[u8]) -> Result<(Vec<u8>, u32, u32), png::DecodingError> {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());
    Ok((buf, info.width, info.height))
}

/// The bundled icon, or a fully transparent one if it cannot be loaded.
fn tray_icon_image() -> Option<Icon> {
    let bundled = decode_png_rgba(TRAY_ICON_PNG)
        .map_err(|e| log::warn!("Failed to decode tray icon PNG: {e}"))
        .ok()
        .and_then(|(rgba, width, height)| {
            Icon::from_rgba(rgba, width, height)
                .map_err(|e| log::warn!("Failed to create tray icon from RGBA data: {e}"))
                .ok()
        });

    bundled.or_else(|| {
        let empty = vec![0; (EMPTY_ICON_SIZE * EMPTY_ICON_SIZE * 4) as usize];
        Icon::from_rgba(empty, EMPTY_ICON_SIZE, EMPTY_ICON_SIZE)
            .map_err(|e| log::warn!("Failed to create empty tray icon: {e}"))
            .ok()
    })
}

impl OverlayApp {
    /// Attempt to create the tray icon with its single "Quit" entry. Returns
    /// `None` if the tray is unavailable (e.g. GNOME without AppIndicator).
    pub(super) fn create_tray_icon() -> Option<(TrayIcon, MenuId)> {
        // GTK must be initialised before tray-icon creates menus on Linux
        #[cfg(target_os = "linux")]
        {
            if gtk::init().is_err() {
                log::warn!("Failed to initialise GTK for system tray");
                return None;
            }
        }

        let quit_item = MenuItem::new("Quit", true, None);
        let quit_id = quit_item.id().clone();

        let menu = Menu::new();
        if let Err(e) = menu.append(&quit_item) {
            log::warn!("Failed to build tray context menu: {e}");
            return None;
        }

        let mut builder = TrayIconBuilder::new()
            .with_tooltip("Days Left")
            .with_menu(Box::new(menu));
        if let Some(icon) = tray_icon_image() {
            builder = builder.with_icon(icon);
        }

        match builder.build() {
            Ok(tray) => {
                log::info!("System tray icon created successfully");
                Some((tray, quit_id))
            }
            Err(e) => {
                log::warn!(
                    "Failed to create system tray icon (tray host may not be available): {e}"
                );
                None
            }
        }
    }

    /// Poll tray menu events; "Quit" closes the main window.
    pub(super) fn poll_tray_events(&mut self, ctx: &egui::Context) {
        if self.tray_icon.is_none() {
            return;
        }

        // libappindicator needs GTK events pumped; winit doesn't run a GTK loop.
        #[cfg(target_os = "linux")]
        {
            while gtk::events_pending() {
                gtk::main_iteration();
            }
        }

        while let Ok(event) = MenuEvent::receiver().try_recv() {
            if Some(&event.id) == self.tray_quit_menu_id.as_ref() {
                log::info!("Quit requested from tray");
                self.exit_requested = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}

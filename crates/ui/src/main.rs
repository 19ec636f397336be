use gpui::*;
use gpui_component::Root;

use bolueta::app::{AvatarPreview, Quit};
use bolueta::assets::Assets;

/// Application entry point.
///
/// Bootstraps the GPUI application with:
/// 1. Bundled avatar assets over the gpui-component icon set
/// 2. gpui-component initialization (required for Root and themes)
/// 3. Global quit action
/// 4. Window creation with Root wrapper around the avatar preview
fn main() {
    tracing_subscriber::fmt::init();

    let app = Application::new().with_assets(Assets);

    app.run(|cx| {
        gpui_component::init(cx);
        tracing::info!("gpui-component initialized");

        cx.on_action(|_: &Quit, cx| {
            cx.quit();
        });

        cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

        cx.spawn(async move |cx| {
            cx.update(|cx| {
                let options = WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                        None,
                        size(px(720.), px(520.)),
                        cx,
                    ))),
                    titlebar: Some(TitlebarOptions {
                        title: Some("Bolueta avatars".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                };

                // Root is required by gpui-component for themed descendants.
                cx.open_window(options, |window, cx| {
                    let preview = cx.new(|cx| AvatarPreview::new(window, cx));
                    cx.new(|cx| Root::new(preview, window, cx))
                })
                .expect("failed to open main window");

                cx.activate(true);
            })
        })
        .detach();
    });
}

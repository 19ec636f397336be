use std::borrow::Cow;

use gpui::{AssetSource, Result, SharedString};

/// Stable identifier of the organization logo shown in assistant avatars.
pub const LOGO_ASSET_PATH: &str = "bolueta.png";
/// Person-with-magnifier glyph shown in user avatars.
pub const USER_SEARCH_ICON_PATH: &str = "icons/user-search.svg";

const EMBEDDED: &[(&str, &[u8])] = &[
    (LOGO_ASSET_PATH, include_bytes!("../assets/bolueta.png")),
    (
        USER_SEARCH_ICON_PATH,
        include_bytes!("../assets/icons/user-search.svg"),
    ),
];

/// Asset source for the app: bundled avatar assets first, then the
/// gpui-component icon set.
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if let Some(bytes) = embedded(path) {
            return Ok(Some(Cow::Borrowed(bytes)));
        }

        gpui_component_assets::Assets.load(path)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut entries = EMBEDDED
            .iter()
            .filter(|(name, _)| name.starts_with(path))
            .map(|(name, _)| SharedString::from(*name))
            .collect::<Vec<_>>();
        entries.extend(gpui_component_assets::Assets.list(path)?);
        Ok(entries)
    }
}

fn embedded(path: &str) -> Option<&'static [u8]> {
    EMBEDDED
        .iter()
        .find(|(name, _)| *name == path)
        .map(|(_, bytes)| *bytes)
}
